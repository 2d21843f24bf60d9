//! The validation gate every mutation passes through first.
//!
//! Checks run in a fixed order and stop at the first failure, so a candidate
//! with several problems reports only one of them.

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::candidate::{Candidate, Field, StagedImage, Submission};
use crate::contact::ContactFields;

/// Required length of `phone_number`, in characters.
pub const PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("please fill in all required fields ({0} is empty)")]
  MissingField(Field),

  #[error("phone number must be 10 digits")]
  InvalidPhone,

  #[error("please select an image from your device")]
  InvalidImageSource,
}

/// Check `candidate` without touching it.
pub fn validate(candidate: &Candidate) -> Result<(), ValidationError> {
  if let Some(field) = Field::iter()
    .find(|f| candidate.get(*f).is_none_or(str::is_empty))
  {
    return Err(ValidationError::MissingField(field));
  }

  // Length only; the content is not required to be numeric.
  if candidate.phone_number.chars().count() != PHONE_LENGTH {
    return Err(ValidationError::InvalidPhone);
  }

  if let Some(uri) = &candidate.staged_image
    && StagedImage::parse(uri).is_none()
  {
    return Err(ValidationError::InvalidImageSource);
  }

  Ok(())
}

impl TryFrom<Candidate> for Submission {
  type Error = ValidationError;

  fn try_from(candidate: Candidate) -> Result<Self, Self::Error> {
    validate(&candidate)?;

    let province = candidate
      .province
      .ok_or(ValidationError::MissingField(Field::Province))?;
    let staged_image = candidate
      .staged_image
      .as_deref()
      .map(|uri| StagedImage::parse(uri).ok_or(ValidationError::InvalidImageSource))
      .transpose()?;
    let address2 = Some(candidate.address2).filter(|a| !a.is_empty());

    Ok(Submission {
      fields: ContactFields {
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        address1: candidate.address1,
        address2,
        city: candidate.city,
        province,
        country: candidate.country,
        postal_code: candidate.postal_code,
        email: candidate.email,
        phone_number: candidate.phone_number,
      },
      staged_image,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::contact::Province;

  fn jane() -> Candidate {
    Candidate {
      first_name: "Jane".into(),
      last_name: "Doe".into(),
      address1: "1 Yonge St".into(),
      address2: String::new(),
      city: "Toronto".into(),
      province: Some(Province::Ontario),
      country: "Canada".into(),
      postal_code: "M5E 1E5".into(),
      email: "jane@example.com".into(),
      phone_number: "4165551234".into(),
      staged_image: Some("file:///tmp/staging/img1.jpg".into()),
    }
  }

  #[test]
  fn complete_candidate_passes() {
    assert_eq!(validate(&jane()), Ok(()));
  }

  #[test]
  fn every_required_field_is_reported_when_empty() {
    for field in Field::iter() {
      let mut c = jane();
      match field {
        Field::FirstName => c.first_name.clear(),
        Field::LastName => c.last_name.clear(),
        Field::Address1 => c.address1.clear(),
        Field::City => c.city.clear(),
        Field::Province => c.province = None,
        Field::Country => c.country.clear(),
        Field::PostalCode => c.postal_code.clear(),
        Field::Email => c.email.clear(),
        Field::PhoneNumber => c.phone_number.clear(),
      }
      assert_eq!(validate(&c), Err(ValidationError::MissingField(field)));
    }
  }

  #[test]
  fn address2_is_optional() {
    let mut c = jane();
    c.address2.clear();
    assert!(validate(&c).is_ok());
  }

  #[test]
  fn first_missing_field_wins() {
    let mut c = jane();
    c.city.clear();
    c.email.clear();
    c.phone_number = "123".into();
    assert_eq!(
      validate(&c),
      Err(ValidationError::MissingField(Field::City))
    );
  }

  #[test]
  fn phone_must_be_ten_characters() {
    for phone in ["416555123", "41655512345", "1"] {
      let mut c = jane();
      c.phone_number = phone.into();
      assert_eq!(validate(&c), Err(ValidationError::InvalidPhone), "{phone}");
    }
  }

  #[test]
  fn phone_content_is_not_checked() {
    let mut c = jane();
    c.phone_number = "416-555-12".into();
    assert!(validate(&c).is_ok());
  }

  #[test]
  fn phone_is_checked_before_image() {
    let mut c = jane();
    c.phone_number = "12".into();
    c.staged_image = Some("https://example.com/a.jpg".into());
    assert_eq!(validate(&c), Err(ValidationError::InvalidPhone));
  }

  #[test]
  fn staged_image_must_be_local() {
    for uri in ["https://example.com/a.jpg", "", "file://", "/tmp/a.jpg"] {
      let mut c = jane();
      c.staged_image = Some(uri.into());
      assert_eq!(
        validate(&c),
        Err(ValidationError::InvalidImageSource),
        "{uri:?}"
      );
    }
  }

  #[test]
  fn no_staged_image_is_fine() {
    let mut c = jane();
    c.staged_image = None;
    assert!(validate(&c).is_ok());
  }

  #[test]
  fn submission_carries_typed_fields() {
    let submission = Submission::try_from(jane()).unwrap();
    assert_eq!(submission.fields.province, Province::Ontario);
    assert_eq!(submission.fields.address2, None);
    let staged = submission.staged_image.unwrap();
    assert_eq!(staged.path(), std::path::Path::new("/tmp/staging/img1.jpg"));
    assert_eq!(staged.uri(), "file:///tmp/staging/img1.jpg");
  }

  #[test]
  fn submission_rejects_invalid_candidate() {
    let mut c = jane();
    c.email.clear();
    assert_eq!(
      Submission::try_from(c),
      Err(ValidationError::MissingField(Field::Email))
    );
  }
}
