//! Load class grids, tiers and training resources from TOML files.

use crate::core::error::{ForgeError, Result};
use crate::stats::{StatKind, StatTally};
use crate::talents::class::ClassTalents;
use crate::training::tier::{Tier, TrainingResource};
use ahash::AHashMap;
use std::fs;

/// Built-in definitions, always loaded first.
const DEFAULT_CLASSES: &str = include_str!("../../data/classes.toml");
const DEFAULT_TRAINING: &str = include_str!("../../data/training.toml");

/// All loaded definitions, keyed by class name and tier/resource rarity.
/// Later sources override earlier ones sharing a key.
#[derive(Debug, Default)]
pub struct Database {
    pub classes: AHashMap<String, ClassTalents>,
    pub tiers: AHashMap<u32, Tier>,
    pub resources: AHashMap<u32, TrainingResource>,
}

impl Database {
    /// Build the database from the built-in files plus any extra files, in
    /// order. An empty result is a configuration error.
    pub fn load(extra_files: &[std::path::PathBuf]) -> Result<Database> {
        let mut db = Database::default();
        db.merge_source(DEFAULT_CLASSES, "builtin classes.toml")?;
        db.merge_source(DEFAULT_TRAINING, "builtin training.toml")?;
        for path in extra_files {
            let content = fs::read_to_string(path)?;
            db.merge_source(&content, &path.display().to_string())?;
        }
        db.ensure_populated()?;
        tracing::info!(
            classes = db.classes.len(),
            tiers = db.tiers.len(),
            resources = db.resources.len(),
            "database loaded"
        );
        Ok(db)
    }

    pub fn class(&self, name: &str) -> Result<&ClassTalents> {
        self.classes
            .get(name)
            .ok_or_else(|| ForgeError::UnknownClass(name.to_string()))
    }

    pub fn tier(&self, rarity: u32) -> Result<&Tier> {
        self.tiers.get(&rarity).ok_or(ForgeError::UnknownTier(rarity))
    }

    pub fn resource(&self, rarity: u32) -> Result<&TrainingResource> {
        self.resources
            .get(&rarity)
            .ok_or(ForgeError::UnknownResource(rarity))
    }

    /// Each pipeline needs its own table: a dataset without classes is as
    /// unusable as one without tiers, so both are checked independently.
    fn ensure_populated(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(ForgeError::Config("no classes in loaded files".to_string()));
        }
        if self.tiers.is_empty() {
            return Err(ForgeError::Config("no tiers in loaded files".to_string()));
        }
        Ok(())
    }

    /// Parse one TOML source and merge its records over the current tables.
    fn merge_source(&mut self, content: &str, source: &str) -> Result<()> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| ForgeError::Config(format!("{}: invalid TOML: {}", source, e)))?;

        if let Some(classes) = value.get("class").and_then(|v| v.as_array()) {
            for class in classes {
                let class = parse_class(class, source)?;
                self.classes.insert(class.name.clone(), class);
            }
        }
        if let Some(tiers) = value.get("tier").and_then(|v| v.as_array()) {
            for tier in tiers {
                let tier = parse_tier(tier, source)?;
                self.tiers.insert(tier.rarity, tier);
            }
        }
        if let Some(resources) = value.get("resource").and_then(|v| v.as_array()) {
            for resource in resources {
                let resource = parse_resource(resource, source)?;
                self.resources.insert(resource.rarity, resource);
            }
        }
        Ok(())
    }
}

fn parse_class(value: &toml::Value, source: &str) -> Result<ClassTalents> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ForgeError::Config(format!("{}: class missing name", source)))?;
    let mut class = ClassTalents::new(name)?;

    if let Some(grid) = value.get("grid").and_then(|v| v.as_array()) {
        for node in grid {
            class.base.add_kind(parse_stat(node, source, name)?);
        }
    }
    if let Some(splits) = value.get("split").and_then(|v| v.as_array()) {
        for split in splits {
            let left = parse_branch(split.get("left"), source, name)?;
            let right = parse_branch(split.get("right"), source, name)?;
            class.branches.push([left, right]);
        }
    }
    Ok(class)
}

fn parse_branch(value: Option<&toml::Value>, source: &str, class: &str) -> Result<StatTally> {
    let nodes = value.and_then(|v| v.as_array()).ok_or_else(|| {
        ForgeError::Config(format!(
            "{}: class '{}' split missing left/right list",
            source, class
        ))
    })?;
    let mut tally = StatTally::new();
    for node in nodes {
        tally.add_kind(parse_stat(node, source, class)?);
    }
    Ok(tally)
}

fn parse_stat(value: &toml::Value, source: &str, class: &str) -> Result<StatKind> {
    let name = value.as_str().ok_or_else(|| {
        ForgeError::Config(format!(
            "{}: class '{}' has a non-string grid node",
            source, class
        ))
    })?;
    StatKind::from_name(name)
}

fn parse_tier(value: &toml::Value, source: &str) -> Result<Tier> {
    let rarity = parse_rarity(value, source, "tier")?;
    let ascensions = value
        .get("ascensions")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            ForgeError::Config(format!("{}: tier {} missing ascensions", source, rarity))
        })?
        .iter()
        .map(|a| {
            a.as_integer()
                .filter(|&xp| xp > 0)
                .map(|xp| xp as u32)
                .ok_or_else(|| {
                    ForgeError::Config(format!(
                        "{}: tier {} has a non-positive ascension",
                        source, rarity
                    ))
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Tier { rarity, ascensions })
}

fn parse_resource(value: &toml::Value, source: &str) -> Result<TrainingResource> {
    let rarity = parse_rarity(value, source, "resource")?;
    let xp = value
        .get("xp")
        .and_then(|v| v.as_integer())
        .filter(|&xp| xp > 0)
        .ok_or_else(|| {
            ForgeError::Config(format!(
                "{}: resource {} needs a positive xp value",
                source, rarity
            ))
        })? as u32;
    let chance = value
        .get("chance")
        .and_then(|v| v.as_integer())
        .filter(|&c| (0..=100).contains(&c))
        .ok_or_else(|| {
            ForgeError::Config(format!(
                "{}: resource {} needs a chance in 0..=100",
                source, rarity
            ))
        })? as u32;
    Ok(TrainingResource { rarity, xp, chance })
}

fn parse_rarity(value: &toml::Value, source: &str, record: &str) -> Result<u32> {
    value
        .get("rarity")
        .and_then(|v| v.as_integer())
        .filter(|&r| r > 0)
        .map(|r| r as u32)
        .ok_or_else(|| ForgeError::Config(format!("{}: {} missing rarity", source, record)))
}
