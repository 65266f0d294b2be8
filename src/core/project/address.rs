//! Legacy plant address migration
//!
//! Older processing statement drafts carry the plant address as three
//! free-text lines. Newer drafts use structured sub-fields. Projection
//! normalizes legacy records so the form journey re-captures the address in
//! the structured layout.

use crate::domain::draft::PlantDetails;

/// Migrates a legacy plant address to the structured layout
///
/// A record is migrated only when the plant name is non-empty and no
/// structured sub-field has ever been written; anything else passes through
/// untouched. Migration blanks the three legacy lines (empty strings, not
/// absent, so the persisted document still carries the keys) and keeps the
/// plant name.
///
/// Returns the possibly-updated details and whether migration happened.
pub fn migrate_plant_address(plant: &PlantDetails) -> (PlantDetails, bool) {
    if !plant.is_legacy_layout() {
        return (plant.clone(), false);
    }

    let mut migrated = plant.clone();
    migrated.plant_address_one = Some(String::new());
    migrated.plant_town_city = Some(String::new());
    migrated.plant_postcode = Some(String::new());
    (migrated, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> PlantDetails {
        PlantDetails {
            plant_name: Some("North Quay Processors".to_string()),
            plant_address_one: Some("1 Harbour Road".to_string()),
            plant_town_city: Some("Grimsby".to_string()),
            plant_postcode: Some("DN31 3LL".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_legacy_record_is_blanked_and_flagged() {
        let (migrated, updated) = migrate_plant_address(&legacy());

        assert!(updated);
        assert_eq!(migrated.plant_name.as_deref(), Some("North Quay Processors"));
        assert_eq!(migrated.plant_address_one.as_deref(), Some(""));
        assert_eq!(migrated.plant_town_city.as_deref(), Some(""));
        assert_eq!(migrated.plant_postcode.as_deref(), Some(""));
    }

    #[test]
    fn test_structured_record_untouched() {
        let structured = PlantDetails {
            plant_name: Some("North Quay Processors".to_string()),
            plant_street_name: Some("Harbour Road".to_string()),
            plant_country: Some("England".to_string()),
            ..Default::default()
        };

        let (result, updated) = migrate_plant_address(&structured);
        assert!(!updated);
        assert_eq!(result, structured);
    }

    #[test]
    fn test_blank_name_not_migrated() {
        let mut plant = legacy();
        plant.plant_name = Some("   ".to_string());

        let (result, updated) = migrate_plant_address(&plant);
        assert!(!updated);
        assert_eq!(result, plant);
    }

    #[test]
    fn test_missing_name_not_migrated() {
        let mut plant = legacy();
        plant.plant_name = None;

        let (_, updated) = migrate_plant_address(&plant);
        assert!(!updated);
    }

    #[test]
    fn test_single_structured_field_blocks_migration() {
        let mut plant = legacy();
        plant.plant_county = Some("Lincolnshire".to_string());

        let (result, updated) = migrate_plant_address(&plant);
        assert!(!updated);
        assert_eq!(result.plant_address_one.as_deref(), Some("1 Harbour Road"));
    }
}
