//! Draft domain model
//!
//! A [`Draft`] is one work-in-progress export document keyed by
//! (user principal, document number, contact). Its `export_data` payload is a
//! closed tagged union over the journey types so dispatch on journey is
//! exhaustive at compile time rather than string-keyed.
//!
//! Persisted field names stay camelCase on the wire for compatibility with
//! documents written by earlier releases.

use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a draft
///
/// A draft transitions to `Complete` exactly once, at submission. Further
/// direct mutation after completion is not expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStatus {
    /// Work in progress, mutated on every partial save
    #[serde(rename = "DRAFT")]
    Draft,
    /// Finalized; the rendered artifact exists
    #[serde(rename = "COMPLETE")]
    Complete,
}

/// Journey classification
///
/// Maps a journey name onto the backend that owns its state. Processing
/// statements and storage documents live in persistent draft stores; every
/// other journey is ephemeral session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JourneyType {
    /// Processing statement draft journey
    ProcessingStatement,
    /// Storage document draft journey
    StorageDocument,
    /// Any other journey; state lives in the session cache
    Other,
}

impl JourneyType {
    /// Resolves a journey name to its backend classification
    ///
    /// Unknown names resolve to [`JourneyType::Other`], never to an error.
    pub fn resolve(journey: &JourneyName) -> Self {
        match journey.as_str() {
            "processingStatement" => JourneyType::ProcessingStatement,
            "storageDocument" => JourneyType::StorageDocument,
            _ => JourneyType::Other,
        }
    }

    /// Uppercase label used in diagnostics and rendering requests
    pub fn label(&self) -> &'static str {
        match self {
            JourneyType::ProcessingStatement => "PROCESSING-STATEMENT",
            JourneyType::StorageDocument => "STORAGE-DOCUMENT",
            JourneyType::Other => "OTHER",
        }
    }
}

/// Classification of a referenced source certificate
///
/// Domestically issued certificates (`Uk`) are subject to local
/// cross-validation and weight backfill; other types pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateType {
    /// Domestically issued catch certificate
    #[serde(rename = "uk")]
    Uk,
    /// Certificate issued by another administration
    #[serde(rename = "nonUk")]
    NonUk,
}

impl CertificateType {
    /// True when the certificate is domestically issued
    pub fn is_domestic(&self) -> bool {
        matches!(self, CertificateType::Uk)
    }
}

/// One catch line item on a processing statement
///
/// `id` is locally generated and stable once assigned; it is regenerated only
/// when the line is cloned into a new document. The certificate number is
/// externally assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchEntry {
    /// Locally generated stable identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Source catch certificate number
    pub catch_certificate_number: String,

    /// Source certificate classification
    pub catch_certificate_type: CertificateType,

    /// Declared species name, e.g. `Atlantic cod (COD)`
    pub species: String,

    /// FAO species code, when the line supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_code: Option<String>,

    /// Scientific name, display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,

    /// Weight landed on the source certificate; backfilled from the source
    /// document's cached products when the certificate is domestic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight_landed: Option<String>,

    /// Export weight before processing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_weight_before_processing: Option<String>,

    /// Export weight after processing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_weight_after_processing: Option<String>,
}

/// One product line item on a storage document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    /// Locally generated stable identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Source certificate number
    pub certificate_number: String,

    /// Source certificate classification
    pub certificate_type: CertificateType,

    /// Commodity code for the stored product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity_code: Option<String>,

    /// Declared species name
    pub species: String,

    /// FAO species code, when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_code: Option<String>,

    /// Weight of the stored product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_weight: Option<String>,

    /// Date the product was unloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_unloading: Option<String>,

    /// Place the product was unloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_unloading: Option<String>,

    /// Transport the product was unloaded from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_unloaded_from: Option<String>,

    /// Weight recorded on the source certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_on_certificate: Option<String>,
}

/// Processing plant identity and address
///
/// Exists in exactly one of two mutually exclusive layouts: the legacy
/// unstructured layout (free-text `plantAddressOne` / `plantTownCity` /
/// `plantPostcode`) or the structured layout (building, street, county,
/// country sub-fields). Once normalized to structured form the legacy fields
/// are cleared, never both populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetails {
    /// Plant name; survives migration between layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_name: Option<String>,

    /// Legacy free-text street line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_address_one: Option<String>,

    /// Legacy free-text town line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_town_city: Option<String>,

    /// Legacy free-text postcode line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_postcode: Option<String>,

    /// Structured: building name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_building_name: Option<String>,

    /// Structured: building number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_building_number: Option<String>,

    /// Structured: sub-building name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_sub_building_name: Option<String>,

    /// Structured: street name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_street_name: Option<String>,

    /// Structured: county
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_county: Option<String>,

    /// Structured: country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_country: Option<String>,
}

impl PlantDetails {
    /// True when any structured address sub-field is present
    pub fn has_structured_address(&self) -> bool {
        self.plant_building_name.is_some()
            || self.plant_building_number.is_some()
            || self.plant_sub_building_name.is_some()
            || self.plant_street_name.is_some()
            || self.plant_county.is_some()
            || self.plant_country.is_some()
    }

    /// True when the record is still in the legacy unstructured layout
    ///
    /// Legacy means the free-text name is non-empty and no structured
    /// sub-field has ever been written.
    pub fn is_legacy_layout(&self) -> bool {
        self.plant_name
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
            && !self.has_structured_address()
    }
}

/// Destination country of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Official country name, uppercase, e.g. `SPAIN`
    pub official_country_name: String,

    /// ISO 3166-1 alpha-2 code, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
}

/// Storage facility on a storage document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageFacility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_address_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_town_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_postcode: Option<String>,
}

/// Exporter details projected alongside the export data for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExporterDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// Export data for a processing statement journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatementData {
    /// Catch line items
    #[serde(default)]
    pub catches: Vec<CatchEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignment_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_certificate_number: Option<String>,

    /// Health certificate date, `YYYY-MM-DD`; validated at projection time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_certificate_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_responsible_for_consignment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_approval_number: Option<String>,

    /// Plant identity and address, legacy or structured layout
    #[serde(flatten)]
    pub plant: PlantDetails,

    /// Exporter projection used when rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter: Option<ExporterDetails>,

    /// Destination country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<Country>,
}

/// Export data for a storage document journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDocumentData {
    /// Product line items
    #[serde(default)]
    pub products: Vec<ProductEntry>,

    /// Storage facilities holding the products
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage_facilities: Vec<StorageFacility>,

    /// Exporter projection used when rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter: Option<ExporterDetails>,

    /// Destination country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<Country>,
}

/// Journey-shaped export payload
///
/// Internally tagged on `journeyType` so the persisted document carries its
/// own classification and deserialization picks the right shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "journeyType")]
pub enum ExportPayload {
    #[serde(rename = "processingStatement")]
    ProcessingStatement(ProcessingStatementData),
    #[serde(rename = "storageDocument")]
    StorageDocument(StorageDocumentData),
}

impl ExportPayload {
    /// Journey classification of this payload
    pub fn journey_type(&self) -> JourneyType {
        match self {
            ExportPayload::ProcessingStatement(_) => JourneyType::ProcessingStatement,
            ExportPayload::StorageDocument(_) => JourneyType::StorageDocument,
        }
    }

    /// Initial per-journey-type state used when no draft exists yet
    ///
    /// Returns `None` for [`JourneyType::Other`]; session journeys start from
    /// an empty object instead.
    pub fn initial_for(journey_type: JourneyType) -> Option<Self> {
        match journey_type {
            JourneyType::ProcessingStatement => Some(ExportPayload::ProcessingStatement(
                ProcessingStatementData::default(),
            )),
            JourneyType::StorageDocument => Some(ExportPayload::StorageDocument(
                StorageDocumentData::default(),
            )),
            JourneyType::Other => None,
        }
    }

    /// Destination country, when the payload carries one
    pub fn destination(&self) -> Option<&Country> {
        match self {
            ExportPayload::ProcessingStatement(data) => data.exported_to.as_ref(),
            ExportPayload::StorageDocument(data) => data.exported_to.as_ref(),
        }
    }

    /// Exporter projection, when the payload carries one
    pub fn exporter(&self) -> Option<&ExporterDetails> {
        match self {
            ExportPayload::ProcessingStatement(data) => data.exporter.as_ref(),
            ExportPayload::StorageDocument(data) => data.exporter.as_ref(),
        }
    }
}

/// One work-in-progress export document
///
/// Exactly one draft exists per document number. Updates are full-document
/// replace-by-merge, not append-only; concurrent writers race and the last
/// write wins, an accepted risk of the one-user-per-document usage pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Document number, unique across the store
    pub document_number: DocumentNumber,

    /// Owning user
    pub user_principal: UserPrincipal,

    /// Contact the draft is scoped to
    pub contact_id: ContactId,

    /// Lifecycle status
    pub status: DraftStatus,

    /// Creation timestamp; regenerated when a document is cloned
    pub created_at: DateTime<Utc>,

    /// Author reference carried from the originating account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Document this draft was cloned from, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloned_from: Option<DocumentNumber>,

    /// Whether the clone's parent was voided at clone time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_document_void: Option<bool>,

    /// Storage location of the rendered artifact, set at completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<String>,

    /// Email of the submitter, set at completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by_email: Option<String>,

    /// Journey-shaped export payload
    pub export_data: ExportPayload,
}

impl Draft {
    /// Creates a fresh draft in `DRAFT` status
    pub fn new(
        document_number: DocumentNumber,
        user_principal: UserPrincipal,
        contact_id: ContactId,
        export_data: ExportPayload,
    ) -> Self {
        Self {
            document_number,
            user_principal,
            contact_id,
            status: DraftStatus::Draft,
            created_at: Utc::now(),
            created_by: None,
            cloned_from: None,
            parent_document_void: None,
            document_uri: None,
            submitted_by_email: None,
            export_data,
        }
    }

    /// Sets the author reference
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// Journey classification of the draft's payload
    pub fn journey_type(&self) -> JourneyType {
        self.export_data.journey_type()
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Storage location of the rendered document
    pub document_uri: String,

    /// Number of the completed document
    pub document_number: DocumentNumber,
}
