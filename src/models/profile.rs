// src/models/profile.rs
use serde::{Deserialize, Serialize};

/// Citizen profile as entered on the Profile tab.
///
/// Every field is a free string; missing keys in stored JSON load as "".
/// The camelCase names are the wire format of `/api/recommend` and of the
/// persisted copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub income: String,
    pub occupation: String,
    pub location: String,
    pub caste_category: String,
    pub disability: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Age,
    Gender,
    Income,
    Occupation,
    Location,
    CasteCategory,
    Disability,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::FullName,
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Income,
        ProfileField::Occupation,
        ProfileField::Location,
        ProfileField::CasteCategory,
        ProfileField::Disability,
    ];

    /// Form/JSON field name.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::Income => "income",
            ProfileField::Occupation => "occupation",
            ProfileField::Location => "location",
            ProfileField::CasteCategory => "casteCategory",
            ProfileField::Disability => "disability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::Income => "Annual Household Income",
            ProfileField::Occupation => "Occupation",
            ProfileField::Location => "Location",
            ProfileField::CasteCategory => "Caste Category",
            ProfileField::Disability => "Disability (if any)",
        }
    }

    /// Select options as (value, label). Empty for free-text inputs.
    pub fn options(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ProfileField::Gender => &[("Male", "Male"), ("Female", "Female"), ("Other", "Other")],
            ProfileField::Income => &[
                ("Below 2.5 Lakh", "Below ₹2.5 Lakh"),
                ("2.5L-5L", "₹2.5 Lakh – ₹5 Lakh"),
                ("5L-10L", "₹5 Lakh – ₹10 Lakh"),
                ("Above 10L", "Above ₹10 Lakh"),
            ],
            ProfileField::Occupation => &[
                ("Farmer", "Farmer"),
                ("Student", "Student"),
                ("Unemployed", "Unemployed"),
                ("Employed", "Employed"),
                ("Self-Employed", "Self-Employed"),
                ("Other", "Other"),
            ],
            ProfileField::CasteCategory => &[
                ("General", "General"),
                ("EWS", "EWS"),
                ("OBC", "OBC"),
                ("SC", "SC"),
                ("ST", "ST"),
                ("Minority", "Minority"),
            ],
            ProfileField::Disability => &[("No", "No"), ("Yes", "Yes")],
            ProfileField::FullName | ProfileField::Age | ProfileField::Location => &[],
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Enter your full name",
            ProfileField::Age => "Enter your age",
            ProfileField::Location => "City / Village / District",
            ProfileField::Gender => "Select gender",
            ProfileField::Income => "Select income range",
            ProfileField::Occupation => "Select occupation",
            ProfileField::CasteCategory => "Select category",
            ProfileField::Disability => "Select option",
        }
    }
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Age => &self.age,
            ProfileField::Gender => &self.gender,
            ProfileField::Income => &self.income,
            ProfileField::Occupation => &self.occupation,
            ProfileField::Location => &self.location,
            ProfileField::CasteCategory => &self.caste_category,
            ProfileField::Disability => &self.disability,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FullName => self.full_name = value,
            ProfileField::Age => self.age = value,
            ProfileField::Gender => self.gender = value,
            ProfileField::Income => self.income = value,
            ProfileField::Occupation => self.occupation = value,
            ProfileField::Location => self.location = value,
            ProfileField::CasteCategory => self.caste_category = value,
            ProfileField::Disability => self.disability = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_names() {
        let mut profile = Profile::default();
        profile.set(ProfileField::CasteCategory, "OBC");
        profile.set(ProfileField::FullName, "Asha");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["casteCategory"], "OBC");
        assert_eq!(json["fullName"], "Asha");
        assert_eq!(json["disability"], "");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let profile: Profile = serde_json::from_str(r#"{"age":"34"}"#).unwrap();
        assert_eq!(profile.age, "34");
        assert_eq!(profile.occupation, "");
    }

    #[test]
    fn field_names_match_stored_keys() {
        let mut profile = Profile::default();
        for field in ProfileField::ALL {
            profile.set(field, field.label());
        }
        let stored = serde_json::to_value(&profile).unwrap();
        for field in ProfileField::ALL {
            assert_eq!(stored[field.name()], field.label());
        }
        assert_eq!(stored.as_object().unwrap().len(), ProfileField::ALL.len());
    }
}
