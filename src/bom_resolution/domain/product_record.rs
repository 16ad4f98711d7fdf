use super::Barcode;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a localized name list (`code` is the language code)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub code: String,
    pub name: String,
}

impl LocalizedName {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Picks the name for `lang`, falling back to the first entry.
pub fn display_name<'a>(names: &'a [LocalizedName], lang: Option<&str>) -> Option<&'a str> {
    lang.and_then(|code| names.iter().find(|n| n.code.eq_ignore_ascii_case(code)))
        .or_else(|| names.first())
        .map(|n| n.name.as_str())
}

/// One link from a parent product to a direct component.
///
/// `dividevalue` / `standvalue` convert the component's stock unit into the
/// parent's consumption unit. `condition` marks optional recipe components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEdge {
    pub barcode: Barcode,
    #[serde(default)]
    pub qty: f64,
    #[serde(rename = "dividevalue", default = "identity_conversion")]
    pub divide_value: f64,
    #[serde(rename = "standvalue", default = "identity_conversion")]
    pub stand_value: f64,
    #[serde(default)]
    pub condition: bool,
}

fn identity_conversion() -> f64 {
    1.0
}

/// Reads an absent or `null` list as empty. Stored documents often carry
/// `"bom": null` for products without components.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComponentEdge {
    pub fn new(barcode: Barcode, qty: f64) -> Self {
        Self {
            barcode,
            qty,
            divide_value: 1.0,
            stand_value: 1.0,
            condition: false,
        }
    }

    pub fn with_conversion(mut self, divide_value: f64, stand_value: f64) -> Self {
        self.divide_value = divide_value;
        self.stand_value = stand_value;
        self
    }

    pub fn with_condition(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }
}

/// A product as stored by the document store: its own descriptive metadata
/// plus its direct component list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "guidfixed", default)]
    pub guid_fixed: String,
    pub barcode: Barcode,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub names: Vec<LocalizedName>,
    #[serde(rename = "itemunitcode", default)]
    pub item_unit_code: String,
    #[serde(rename = "itemunitnames", default, deserialize_with = "null_as_empty")]
    pub item_unit_names: Vec<LocalizedName>,
    #[serde(rename = "imageuri", default)]
    pub image_uri: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bom: Vec<ComponentEdge>,
}

impl ProductRecord {
    pub fn new(barcode: Barcode) -> Self {
        Self {
            guid_fixed: String::new(),
            barcode,
            names: Vec::new(),
            item_unit_code: String::new(),
            item_unit_names: Vec::new(),
            image_uri: String::new(),
            bom: Vec::new(),
        }
    }

    pub fn with_name(mut self, code: &str, name: &str) -> Self {
        self.names.push(LocalizedName::new(code, name));
        self
    }

    pub fn with_unit(mut self, unit_code: &str, unit_name: &str) -> Self {
        self.item_unit_code = unit_code.to_string();
        self.item_unit_names = vec![LocalizedName::new("en", unit_name)];
        self
    }

    pub fn with_image(mut self, image_uri: &str) -> Self {
        self.image_uri = image_uri.to_string();
        self
    }

    pub fn with_component(mut self, edge: ComponentEdge) -> Self {
        self.bom.push(edge);
        self
    }

    pub fn has_components(&self) -> bool {
        !self.bom.is_empty()
    }

    pub fn display_name(&self, lang: Option<&str>) -> Option<&str> {
        display_name(&self.names, lang)
    }
}
