//! Command-line flags standing in for the edit form.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use lonecard_core::{
  candidate::{Candidate, StagedImage},
  contact::{Contact, Province},
};

/// Each flag overwrites the matching form field; omitted flags keep the value
/// loaded from the stored contact (or empty in create mode).
#[derive(Args, Debug, Default)]
pub struct FormArgs {
  #[arg(long)]
  first_name: Option<String>,

  #[arg(long)]
  last_name: Option<String>,

  #[arg(long)]
  address1: Option<String>,

  /// Optional second address line; pass "" to clear it.
  #[arg(long)]
  address2: Option<String>,

  #[arg(long)]
  city: Option<String>,

  /// Two-letter code, e.g. ON. See `lonecard provinces`.
  #[arg(long)]
  province: Option<Province>,

  #[arg(long)]
  country: Option<String>,

  #[arg(long)]
  postal_code: Option<String>,

  #[arg(long)]
  email: Option<String>,

  /// Ten characters.
  #[arg(long = "phone")]
  phone_number: Option<String>,

  /// A local image to use as the photo. The file is moved, not copied.
  #[arg(long, value_name = "PATH")]
  image: Option<PathBuf>,
}

impl FormArgs {
  /// Overlay the given flags onto `form`.
  pub fn apply(self, form: &mut Candidate) -> anyhow::Result<()> {
    let text = [
      (self.first_name, &mut form.first_name),
      (self.last_name, &mut form.last_name),
      (self.address1, &mut form.address1),
      (self.address2, &mut form.address2),
      (self.city, &mut form.city),
      (self.country, &mut form.country),
      (self.postal_code, &mut form.postal_code),
      (self.email, &mut form.email),
      (self.phone_number, &mut form.phone_number),
    ];
    for (flag, field) in text {
      if let Some(value) = flag {
        *field = value;
      }
    }

    if let Some(province) = self.province {
      form.province = Some(province);
    }

    if let Some(path) = self.image {
      let absolute = std::path::absolute(&path)
        .with_context(|| format!("resolving image path {}", path.display()))?;
      let staged = StagedImage::from_path(&absolute).with_context(|| {
        format!("{} cannot be expressed as a file URI", absolute.display())
      })?;
      form.staged_image = Some(staged.uri().to_owned());
    }

    Ok(())
  }
}

/// Plain-text rendering for `lonecard show`.
pub fn render(contact: &Contact) -> String {
  let f = &contact.fields;
  let mut lines = vec![
    format!("id:          {}", contact.id),
    format!("name:        {} {}", f.first_name, f.last_name),
    format!("address1:    {}", f.address1),
  ];
  if let Some(a2) = &f.address2 {
    lines.push(format!("address2:    {a2}"));
  }
  lines.extend([
    format!("city:        {}", f.city),
    format!("province:    {} ({})", f.province.name(), f.province),
    format!("country:     {}", f.country),
    format!("postal code: {}", f.postal_code),
    format!("email:       {}", f.email),
    format!("phone:       {}", f.phone_number),
    format!(
      "photo:       {}",
      contact.image_uri.as_deref().unwrap_or("(none)")
    ),
  ]);
  lines.join("\n")
}
