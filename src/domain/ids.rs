//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers that key a
//! draft: the user principal, the document number and the contact. Each type
//! ensures type safety so a contact id can never be passed where a document
//! number is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document number newtype wrapper
///
/// Identifies one export document across its whole lifecycle, draft through
/// completion. Externally assigned, e.g. `GBR-2024-PS-C7B2A9F14`.
///
/// # Examples
///
/// ```
/// use harbour::domain::ids::DocumentNumber;
/// use std::str::FromStr;
///
/// let number = DocumentNumber::from_str("GBR-2024-PS-C7B2A9F14").unwrap();
/// assert_eq!(number.as_str(), "GBR-2024-PS-C7B2A9F14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    /// Creates a new DocumentNumber from a string
    ///
    /// # Arguments
    ///
    /// * `number` - The document number string
    ///
    /// # Returns
    ///
    /// Returns `Ok(DocumentNumber)` if the number is valid, `Err` otherwise
    pub fn new(number: impl Into<String>) -> Result<Self, String> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err("Document number cannot be empty".to_string());
        }
        Ok(Self(number))
    }

    /// Returns the document number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// User principal newtype wrapper
///
/// The authenticated account that owns a draft. Opaque to this crate; the
/// identity provider decides the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPrincipal(String);

impl UserPrincipal {
    /// Creates a new UserPrincipal from a string
    pub fn new(principal: impl Into<String>) -> Result<Self, String> {
        let principal = principal.into();
        if principal.trim().is_empty() {
            return Err("User principal cannot be empty".to_string());
        }
        Ok(Self(principal))
    }

    /// Returns the principal as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserPrincipal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for UserPrincipal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Contact identifier newtype wrapper
///
/// The contact (organisation member) a draft is scoped to. Together with
/// [`UserPrincipal`] and [`DocumentNumber`] it forms the full draft key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(String);

impl ContactId {
    /// Creates a new ContactId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Contact ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the contact ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Journey name newtype wrapper
///
/// Names a multi-step form flow, e.g. `processingStatement` or an ad-hoc
/// session journey like `favourites`. Resolution to a backend happens via
/// [`crate::domain::draft::JourneyType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JourneyName(String);

impl JourneyName {
    /// Creates a new JourneyName from a string
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Journey name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the journey name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JourneyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JourneyName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_number_valid() {
        let number = DocumentNumber::new("GBR-2024-PS-C7B2A9F14").unwrap();
        assert_eq!(number.as_str(), "GBR-2024-PS-C7B2A9F14");
        assert_eq!(number.to_string(), "GBR-2024-PS-C7B2A9F14");
    }

    #[test]
    fn test_document_number_empty_rejected() {
        assert!(DocumentNumber::new("").is_err());
        assert!(DocumentNumber::new("   ").is_err());
    }

    #[test]
    fn test_user_principal_valid() {
        let user = UserPrincipal::new("ABCD-1234-selfserve").unwrap();
        assert_eq!(user.as_str(), "ABCD-1234-selfserve");
    }

    #[test]
    fn test_contact_id_empty_rejected() {
        assert!(ContactId::new("").is_err());
    }

    #[test]
    fn test_journey_name_from_str() {
        let journey = JourneyName::from_str("processingStatement").unwrap();
        assert_eq!(journey.as_str(), "processingStatement");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let number = DocumentNumber::new("GBR-2024-SD-1").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"GBR-2024-SD-1\"");

        let back: DocumentNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
    }
}
