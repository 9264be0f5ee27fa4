//! Content hash over a normalized item list

use sha2::{Digest, Sha256};

use crate::error::CacheError;
use crate::models::CanonicalItem;

/// Hex SHA-256 of the items serialized as compact JSON.
///
/// Field order follows the struct definition, so equal lists (same values,
/// same order) always hash the same.
pub fn fingerprint(items: &[CanonicalItem]) -> Result<String, CacheError> {
    let bytes = serde_json::to_vec(items)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> CanonicalItem {
        CanonicalItem {
            id: id.to_string(),
            name: name.to_string(),
            color_hex: "7D6D00".to_string(),
            quality: "Unique".to_string(),
            item_type: "Level 1 Hat".to_string(),
            image_url: "https://example.com/a.png".to_string(),
            category: "misc".to_string(),
            description: Vec::new(),
            classes: vec!["Scout".to_string()],
        }
    }

    #[test]
    fn same_items_same_hash() {
        let items = vec![item("1", "Ghastly Gibus"), item("2", "Bill's Hat")];
        let again = items.clone();
        assert_eq!(fingerprint(&items).unwrap(), fingerprint(&again).unwrap());
    }

    #[test]
    fn hash_is_hex_sha256() {
        let hash = fingerprint(&[item("1", "Ghastly Gibus")]).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn empty_list_hashes_json_brackets() {
        // sha256("[]")
        assert_eq!(
            fingerprint(&[]).unwrap(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }

    #[test]
    fn any_field_change_changes_hash() {
        let base = vec![item("1", "Ghastly Gibus")];
        let base_hash = fingerprint(&base).unwrap();

        let mut renamed = base.clone();
        renamed[0].name = "Ghastlier Gibus".to_string();
        assert_ne!(fingerprint(&renamed).unwrap(), base_hash);

        let mut recoloured = base.clone();
        recoloured[0].color_hex = "CF6A32".to_string();
        assert_ne!(fingerprint(&recoloured).unwrap(), base_hash);

        let mut reclassed = base.clone();
        reclassed[0].classes.clear();
        assert_ne!(fingerprint(&reclassed).unwrap(), base_hash);
    }

    #[test]
    fn order_matters() {
        let a = vec![item("1", "A"), item("2", "B")];
        let b = vec![item("2", "B"), item("1", "A")];
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }
}
