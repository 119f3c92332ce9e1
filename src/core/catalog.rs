//! Static clinic data: service and doctor lists, reviews, contact details,
//! profile and opening hours.
//!
//! The built-in [`Catalog::default`] is what the application ships with. A TOML
//! file can override any subset of it; fields it does not name keep their
//! defaults.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Deserializer};
use time::{Time, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    core::slots::{DEFAULT_CLOSE, DEFAULT_OPEN, SlotSelector, half_hour_labels},
    models::{ContactInfo, Doctor, Profile, Review},
};

const CLOCK: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("opening hours must open before they close ({open} >= {close})")]
    InvalidHours { open: Time, close: Time },
    #[error("page size must be at least 1")]
    EmptyPageSize,
    #[error("default slot {0:?} is not an available slot")]
    DefaultSlotUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    #[serde(deserialize_with = "clock_time")]
    pub open: Time,
    #[serde(deserialize_with = "clock_time")]
    pub close: Time,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN,
            close: DEFAULT_CLOSE,
        }
    }
}

fn clock_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Time::parse(&raw, CLOCK).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub clinic_name: String,
    pub services: Vec<String>,
    pub booking_doctors: Vec<String>,
    pub directory: Vec<String>,
    pub page_size: usize,
    pub reviews: Vec<Review>,
    pub contact: ContactInfo,
    pub profile: Profile,
    pub hours: OpeningHours,
    pub unavailable_slots: Vec<String>,
    pub default_slot: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            clinic_name: "Smile Studio".to_string(),
            services: owned(&[
                "Teeth Whitening",
                "Root Canal",
                "Braces Consultation",
                "Implant Checkup",
            ]),
            booking_doctors: owned(&["Dr. Anika Rahman", "Dr. Kamal Hasan", "Dr. Sara Chowdhury"]),
            directory: owned(&[
                "Dr. Anika Rahman",
                "Dr. Kamal Hasan",
                "Dr. Sara Chowdhury",
                "Dr. Tanvir Ahmed",
                "Dr. Nabila Islam",
                "Dr. Rafiul Karim",
                "Dr. Faria Noman",
                "Dr. Mahin Khan",
                "Dr. Nusrat Noor",
                "Dr. Omar Siddiqui",
                "Dr. Jaya Sengupta",
                "Dr. Priyo Das",
                "Dr. Ayman Haque",
                "Dr. Ruhee Akter",
                "Dr. Tahsin Alam",
                "Dr. Zara Jahan",
                "Dr. Partha Roy",
                "Dr. Arif Hossain",
                "Dr. Maria Huda",
                "Dr. Rion Biswas",
                "Dr. Samiul Arefin",
                "Dr. Shaila Akter",
                "Dr. Sakib Rahman",
            ]),
            page_size: DEFAULT_PAGE_SIZE,
            reviews: vec![
                Review {
                    name: "Ayesha Khan".to_string(),
                    text: "Excellent service! The doctor was very professional and caring."
                        .to_string(),
                },
                Review {
                    name: "Rafiul Islam".to_string(),
                    text: "Quick and painless appointment. Highly recommend Smile Studio!"
                        .to_string(),
                },
                Review {
                    name: "Nusrat Jahan".to_string(),
                    text: "The staff were friendly and the environment was clean.".to_string(),
                },
            ],
            contact: ContactInfo::default(),
            profile: Profile::default(),
            hours: OpeningHours::default(),
            unavailable_slots: owned(&["12:00 PM", "5:30 PM"]),
            default_slot: "10:30 AM".to_string(),
        }
    }
}

impl Catalog {
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        log::debug!("loading catalog from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::EmptyPageSize);
        }
        if self.hours.open >= self.hours.close {
            return Err(CatalogError::InvalidHours {
                open: self.hours.open,
                close: self.hours.close,
            });
        }
        let labels = self.slot_labels();
        let disabled = self.disabled_slots();
        if !labels.contains(&self.default_slot) || disabled.contains(&self.default_slot) {
            return Err(CatalogError::DefaultSlotUnavailable(self.default_slot.clone()));
        }
        for slot in &self.unavailable_slots {
            if !labels.contains(slot) {
                log::warn!("unavailable slot {slot:?} is outside opening hours");
            }
        }
        if self.services.is_empty() || self.booking_doctors.is_empty() {
            log::warn!("catalog has no services or no bookable doctors");
        }
        Ok(())
    }

    /// Directory entries with 1-based ids in list order.
    pub fn doctors(&self) -> Vec<Doctor> {
        self.directory
            .iter()
            .zip(1..)
            .map(|(name, id)| Doctor::new(id, name.as_str()))
            .collect()
    }

    pub fn slot_labels(&self) -> Vec<String> {
        half_hour_labels(self.hours.open, self.hours.close)
    }

    pub fn disabled_slots(&self) -> HashSet<String> {
        self.unavailable_slots.iter().cloned().collect()
    }

    pub fn slot_selector(&self) -> SlotSelector {
        SlotSelector::new(self.slot_labels(), &self.disabled_slots(), &self.default_slot)
    }
}
