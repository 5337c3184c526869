//! Records returned by the content/search BFF.
//!
//! The marketplace's domain records are owned by other services, so each one
//! only names its identifier and a couple of display fields. Everything else
//! lands in `extra` untouched, which keeps a decode/encode cycle lossless.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

pub type Extra = Map<String, Value>;

fn str_field<'a>(extra: &'a Extra, key: &str) -> Option<&'a str> {
    extra.get(key).and_then(Value::as_str)
}

/// A nested record the BFF may leave out or send as `null`.
///
/// Both cases are kept apart so re-encoding writes back exactly what came in.
/// Pair it with `#[serde(default, skip_serializing_if = "Maybe::is_absent")]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Maybe<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Maybe<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Present(value),
            None => Self::Null,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breeder {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Breeder {
    pub fn name(&self) -> Option<&str> {
        str_field(&self.extra, "name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreederContact {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl BreederContact {
    /// `PHONE`, `WHATS_APP` and so on.
    pub fn kind(&self) -> Option<&str> {
        str_field(&self.extra, "type")
    }

    pub fn value(&self) -> Option<&str> {
        str_field(&self.extra, "value")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poultry {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Poultry {
    pub fn name(&self) -> Option<&str> {
        str_field(&self.extra, "name")
    }

    /// Set by the BFF on listings; picked out of the poultry's images.
    pub fn main_image(&self) -> Option<&str> {
        str_field(&self.extra, "mainImage")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoultryImage {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PoultryImage {
    pub fn image_url(&self) -> Option<&str> {
        str_field(&self.extra, "imageUrl")
    }
}

/// Timestamped event on a poultry: vaccine, measurement, weighing and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoultryRegister {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PoultryRegister {
    pub fn kind(&self) -> Option<&str> {
        str_field(&self.extra, "type")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertising {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisingQuestion {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl AdvertisingQuestion {
    pub fn content(&self) -> Option<&str> {
        str_field(&self.extra, "content")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisingQuestionAnswer {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl AdvertisingQuestionAnswer {
    pub fn content(&self) -> Option<&str> {
        str_field(&self.extra, "content")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    pub fn name(&self) -> Option<&str> {
        str_field(&self.extra, "name")
    }
}

// Composite shapes the BFF assembles out of the records above.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreederWithContacts {
    #[serde(flatten)]
    pub breeder: Breeder,
    pub contacts: Vec<BreederContact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoultryWithImages {
    #[serde(flatten)]
    pub poultry: Poultry,
    pub images: Vec<PoultryImage>,
}

impl PoultryWithImages {
    pub fn main_image(&self) -> Option<&str> {
        self.poultry.main_image()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoultryDetail {
    #[serde(flatten)]
    pub poultry: Poultry,
    pub images: Vec<PoultryImage>,
}

impl PoultryDetail {
    pub fn code(&self) -> Option<&str> {
        str_field(&self.poultry.extra, "code")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    #[serde(flatten)]
    pub answer: AdvertisingQuestionAnswer,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(flatten)]
    pub question: AdvertisingQuestion,
    pub answers: Vec<QuestionAnswer>,
    pub user: User,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub breeder: Maybe<Breeder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisingDetail {
    #[serde(flatten)]
    pub advertising: Advertising,
    pub questions: Vec<Question>,
    pub deals: u64,
    pub favorites: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultrySummary {
    #[serde(flatten)]
    pub poultry: Poultry,
    pub breeder_id: String,
}

impl PoultrySummary {
    pub fn main_image(&self) -> Option<&str> {
        self.poultry.main_image()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeasurementMetadata {
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub measurement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementAndWeight {
    #[serde(flatten)]
    pub register: PoultryRegister,
}

impl MeasurementAndWeight {
    /// Weight and measurement readings; empty when the register carries none.
    pub fn metadata(&self) -> MeasurementMetadata {
        self.register
            .extra
            .get("metadata")
            .and_then(|raw| serde_json::from_value(raw.clone()).ok())
            .unwrap_or_default()
    }
}

/// One advertising card as shown on the home page and in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryData {
    pub poultry: PoultrySummary,
    pub advertising: Advertising,
    pub breeder: Breeder,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub measurement_and_weight: Maybe<MeasurementAndWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    pub title: String,
    pub identifier: String,
    pub advertisings: Vec<PoultryData>,
}

/// Page counters per poultry category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultriesPages {
    pub for_sale: u32,
    pub reproductives: u32,
    pub matrixes: u32,
    pub males: u32,
    pub females: u32,
}

// Response envelopes. Every successful answer carries `ok: true`.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetBreedersSuccess {
    pub ok: bool,
    pub breeders: Vec<Breeder>,
}

impl GetBreedersSuccess {
    /// What `get_breeders` resolves to when the request fails.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBreederSuccess {
    pub ok: bool,
    pub breeder: BreederWithContacts,
    pub poultries: Vec<Poultry>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBreederPoultriesSuccess {
    pub ok: bool,
    pub for_sale: Vec<PoultryWithImages>,
    pub reproductives: Vec<PoultryWithImages>,
    pub matrixes: Vec<PoultryWithImages>,
    pub males: Vec<PoultryWithImages>,
    pub females: Vec<PoultryWithImages>,
    pub pagination: PoultriesPages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoultrySuccess {
    pub ok: bool,
    pub poultry: PoultryDetail,
    pub registers: Vec<PoultryRegister>,
    pub advertisings: Vec<AdvertisingDetail>,
    pub vaccines: Vec<PoultryRegister>,
    /// The BFF spells this field `measurementAndWeigthing`.
    #[serde(rename = "measurementAndWeigthing")]
    pub measurement_and_weighting: Vec<PoultryRegister>,
    pub whats_app_contacts: Vec<BreederContact>,
    pub breeder: Breeder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetHomeSuccess {
    pub ok: bool,
    pub carousels: Vec<Carousel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetSearchSuccess {
    pub ok: bool,
    pub advertisings: Vec<PoultryData>,
    pub pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breeder_keeps_unknown_fields() {
        let raw = json!({
            "id": "b-1",
            "name": "Galpão Índio",
            "foundationDate": "2012-03-01",
            "address": {"city": "Recife", "province": "PE"}
        });

        let breeder: Breeder = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(breeder.id, "b-1");
        assert_eq!(breeder.name(), Some("Galpão Índio"));
        assert_eq!(breeder.extra["address"]["city"], "Recife");
        assert_eq!(serde_json::to_value(&breeder).unwrap(), raw);
    }

    #[test]
    fn test_breeder_with_contacts_splits_contacts_from_extra() {
        let raw = json!({
            "id": "b-1",
            "description": "criatório",
            "contacts": [{"id": "c-1", "type": "WHATS_APP", "value": "81999999999"}]
        });

        let breeder: BreederWithContacts = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(breeder.contacts.len(), 1);
        assert_eq!(breeder.contacts[0].kind(), Some("WHATS_APP"));
        assert!(!breeder.breeder.extra.contains_key("contacts"));
        assert_eq!(serde_json::to_value(&breeder).unwrap(), raw);
    }

    #[test]
    fn test_poultry_detail_field_spelling() {
        let raw = json!({
            "ok": true,
            "poultry": {"id": "p-1", "images": [], "code": "AB-12"},
            "registers": [],
            "advertisings": [],
            "vaccines": [],
            "measurementAndWeigthing": [{"id": "r-1", "type": "MEASUREMENT_AND_WEIGHING"}],
            "whatsAppContacts": [],
            "breeder": {"id": "b-1"}
        });

        let detail: GetPoultrySuccess = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(detail.measurement_and_weighting.len(), 1);
        assert_eq!(detail.poultry.code(), Some("AB-12"));
        assert_eq!(serde_json::to_value(&detail).unwrap(), raw);
    }

    #[test]
    fn test_null_and_missing_fields_survive_round_trip() {
        let breeder = json!({"id": "b-1", "name": null, "city": "Recife"});
        let decoded: Breeder = serde_json::from_value(breeder.clone()).unwrap();
        assert_eq!(decoded.name(), None);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), breeder);

        let poultry = json!({"id": "p-1", "images": []});
        let decoded: PoultryWithImages = serde_json::from_value(poultry.clone()).unwrap();
        assert_eq!(decoded.main_image(), None);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), poultry);

        let register = json!({"id": "r-1", "type": "MEASUREMENT_AND_WEIGHING"});
        let decoded: MeasurementAndWeight = serde_json::from_value(register.clone()).unwrap();
        assert_eq!(decoded.metadata(), MeasurementMetadata::default());
        assert_eq!(serde_json::to_value(&decoded).unwrap(), register);
    }

    #[test]
    fn test_optional_nested_record_keeps_null_apart_from_absent() {
        let card = |extra: serde_json::Value| {
            let mut raw = json!({
                "poultry": {"id": "p-1", "breederId": "b-1"},
                "advertising": {"id": "a-1"},
                "breeder": {"id": "b-1"}
            });
            if let serde_json::Value::Object(fields) = extra {
                raw.as_object_mut().unwrap().extend(fields);
            }
            raw
        };

        let absent = card(json!({}));
        let decoded: PoultryData = serde_json::from_value(absent.clone()).unwrap();
        assert!(decoded.measurement_and_weight.is_absent());
        assert_eq!(serde_json::to_value(&decoded).unwrap(), absent);

        let null = card(json!({"measurementAndWeight": null}));
        let decoded: PoultryData = serde_json::from_value(null.clone()).unwrap();
        assert_eq!(decoded.measurement_and_weight, Maybe::Null);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), null);

        let present = card(json!({"measurementAndWeight": {
            "id": "r-1",
            "metadata": {"weight": "3.9"}
        }}));
        let decoded: PoultryData = serde_json::from_value(present.clone()).unwrap();
        let register = decoded.measurement_and_weight.as_option().unwrap();
        assert_eq!(register.metadata().weight.as_deref(), Some("3.9"));
        assert_eq!(serde_json::to_value(&decoded).unwrap(), present);
    }

    #[test]
    fn test_empty_breeders_fallback() {
        let empty = GetBreedersSuccess::empty();
        assert!(!empty.ok);
        assert!(empty.breeders.is_empty());
    }
}
