//! Extraction and index properties.

use crate::catalog_strategy;
use proptest::prelude::*;
use tagrank::{extract, tokenize, Attribute, Index, IndexConfig};

fn no_tags() -> IndexConfig {
    IndexConfig {
        include_tags_attribute: false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: A token's weight is that of the first attribute containing it.
    #[test]
    fn prop_first_attribute_wins(catalog in catalog_strategy()) {
        let config = IndexConfig::default();
        for entity in &catalog {
            let tokens = extract(entity, &config);
            for (token, weight) in tokens.iter() {
                let first = Attribute::PRECEDENCE
                    .into_iter()
                    .find(|a| tokenize(entity.attribute(*a)).any(|t| t == token));
                prop_assert_eq!(first.map(Attribute::weight), Some(weight));
            }
        }
    }

    /// Property: Every token of every attribute lands in the token set.
    #[test]
    fn prop_extraction_is_complete(catalog in catalog_strategy()) {
        let config = IndexConfig::default();
        for entity in &catalog {
            let tokens = extract(entity, &config);
            for attribute in Attribute::PRECEDENCE {
                for token in tokenize(entity.attribute(attribute)) {
                    prop_assert!(tokens.contains(&token), "missing '{}'", token);
                }
            }
        }
    }

    /// Property: Without tags, no token carries the tags weight.
    #[test]
    fn prop_no_tag_weight_when_disabled(catalog in catalog_strategy()) {
        for entity in &catalog {
            let tokens = extract(entity, &no_tags());
            prop_assert!(tokens.iter().all(|(_, w)| w != Attribute::Tags.weight()));
        }
    }

    /// Property: Building twice yields identical token sets.
    #[test]
    fn prop_build_is_deterministic(catalog in catalog_strategy()) {
        let first = Index::build(catalog.clone(), IndexConfig::default()).unwrap();
        let second = Index::build(catalog, IndexConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: Toggling tags off and back on reproduces the original index.
    #[test]
    fn prop_tags_toggle_round_trip(catalog in catalog_strategy()) {
        let original = Index::build(catalog.clone(), IndexConfig::default()).unwrap();
        let mut index = original.clone();

        index.rebuild(catalog.clone(), no_tags()).unwrap();
        index.rebuild(catalog, IndexConfig::default()).unwrap();

        prop_assert_eq!(index, original);
    }

    /// Property: One index entry per entity, each resolvable by id.
    #[test]
    fn prop_every_entity_resolves(catalog in catalog_strategy()) {
        let index = Index::build(catalog.clone(), IndexConfig::default()).unwrap();
        prop_assert_eq!(index.len(), catalog.len());
        for entity in &catalog {
            prop_assert_eq!(index.lookup(&entity.id).unwrap(), entity);
        }
    }
}
