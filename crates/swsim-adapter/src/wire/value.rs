/*
[INPUT]:  Domain field values (strings, decimals, dates, composites)
[OUTPUT]: Ordered, fully resolved wire structures
[POS]:    Wire layer - the representation handed to the transport
[UPDATE]: When the transport needs new scalar kinds
*/

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single resolved wire value. Scalars render as text on the wire;
/// composites are already resolved into ordered structures, so serializing
/// the same value twice yields identical output.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Text(String),
    Decimal(Decimal),
    Int(i64),
    Bool(bool),
    Struct(WireStruct),
    List(Vec<WireValue>),
}

impl WireValue {
    /// Text content for scalar values. Composites have no scalar rendering.
    pub fn render(&self) -> Option<String> {
        match self {
            WireValue::Text(s) => Some(s.clone()),
            WireValue::Decimal(d) => Some(d.to_string()),
            WireValue::Int(i) => Some(i.to_string()),
            WireValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            WireValue::Struct(_) | WireValue::List(_) => None,
        }
    }

    pub fn as_struct(&self) -> Option<&WireStruct> {
        match self {
            WireValue::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::Text(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::Text(value)
    }
}

impl From<&String> for WireValue {
    fn from(value: &String) -> Self {
        WireValue::Text(value.clone())
    }
}

impl From<Decimal> for WireValue {
    fn from(value: Decimal) -> Self {
        WireValue::Decimal(value)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

impl From<i32> for WireValue {
    fn from(value: i32) -> Self {
        WireValue::Int(value.into())
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Int(value)
    }
}

impl From<u32> for WireValue {
    fn from(value: u32) -> Self {
        WireValue::Int(value.into())
    }
}

impl From<NaiveDate> for WireValue {
    fn from(value: NaiveDate) -> Self {
        WireValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<WireStruct> for WireValue {
    fn from(value: WireStruct) -> Self {
        WireValue::Struct(value)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(value: Vec<WireValue>) -> Self {
        WireValue::List(value)
    }
}

/// Ordered wire-field-name -> value mapping. Field names are `'static`
/// literals declared by the per-type mapping tables; insertion order is the
/// wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireStruct {
    fields: Vec<(&'static str, WireValue)>,
}

impl WireStruct {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field.
    pub fn field(&mut self, name: &'static str, value: impl Into<WireValue>) {
        self.fields.push((name, value.into()));
    }

    /// Append a field when the source value is present; absent values are
    /// omitted entirely, never emitted as empty.
    pub fn field_opt<T: Into<WireValue>>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.field(name, value);
        }
    }

    /// Insert a field at the front, ahead of every declared field. Used for
    /// the authentication payload.
    pub fn prepend(&mut self, name: &'static str, value: impl Into<WireValue>) {
        self.fields.insert(0, (name, value.into()));
    }

    /// First value carried under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &WireValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Field names in wire order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
