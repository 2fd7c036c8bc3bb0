/*
[INPUT]:  Resolved wire structures and raw response documents
[OUTPUT]: Request envelopes and parsed response bodies
[POS]:    HTTP layer - XML envelope codec
[UPDATE]: When envelope framing or namespace handling changes
*/

use std::io;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

use crate::wire::{WireStruct, WireValue};

use super::error::{Result, SwsimError};
use super::response::Fault;

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

fn xml_err(err: impl std::fmt::Display) -> SwsimError {
    SwsimError::Xml(err.to_string())
}

/// Serialize a payload into a request envelope. Fields are written in
/// `WireStruct` order; writing the same payload twice yields identical bytes.
pub fn build_envelope(
    namespace: &str,
    namespace_identifier: &str,
    operation: &str,
    payload: &WireStruct,
) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_err)?;

    let ns_attr = format!("xmlns:{namespace_identifier}");
    let mut envelope = BytesStart::new("soap:Envelope");
    envelope.push_attribute(("xmlns:soap", SOAP_ENV_NS));
    envelope.push_attribute((ns_attr.as_str(), namespace));
    writer.write_event(Event::Start(envelope)).map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("soap:Body")))
        .map_err(xml_err)?;

    let op_tag = format!("{namespace_identifier}:{operation}");
    writer
        .write_event(Event::Start(BytesStart::new(op_tag.as_str())))
        .map_err(xml_err)?;
    for (name, value) in payload.iter() {
        write_value(&mut writer, namespace_identifier, name, value)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(op_tag.as_str())))
        .map_err(xml_err)?;

    writer
        .write_event(Event::End(BytesEnd::new("soap:Body")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap:Envelope")))
        .map_err(xml_err)?;

    String::from_utf8(writer.into_inner()).map_err(xml_err)
}

fn write_value<W: io::Write>(
    writer: &mut Writer<W>,
    namespace_identifier: &str,
    name: &str,
    value: &WireValue,
) -> Result<()> {
    match value {
        // A list repeats its field name once per element, in input order.
        WireValue::List(items) => {
            for item in items {
                write_value(writer, namespace_identifier, name, item)?;
            }
        }
        WireValue::Struct(fields) => {
            let tag = format!("{namespace_identifier}:{name}");
            writer
                .write_event(Event::Start(BytesStart::new(tag.as_str())))
                .map_err(xml_err)?;
            for (child, child_value) in fields.iter() {
                write_value(writer, namespace_identifier, child, child_value)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(tag.as_str())))
                .map_err(xml_err)?;
        }
        scalar => {
            let tag = format!("{namespace_identifier}:{name}");
            let text = scalar.render().unwrap_or_default();
            writer
                .write_event(Event::Start(BytesStart::new(tag.as_str())))
                .map_err(xml_err)?;
            writer
                .write_event(Event::Text(BytesText::new(&text)))
                .map_err(xml_err)?;
            writer
                .write_event(Event::End(BytesEnd::new(tag.as_str())))
                .map_err(xml_err)?;
        }
    }
    Ok(())
}

struct Node {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            }
        } else {
            Value::Object(self.children)
        }
    }
}

/// Insert under `key`, turning repeated siblings into an in-order array.
fn insert(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Parse a response envelope into the body contents, keyed by local element
/// names, with a `soap:Fault` pulled out as a protocol fault.
pub fn parse_envelope(xml: &str) -> Result<(Option<Fault>, Value)> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Node::new(String::new())];
    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Start(e) => stack.push(Node::new(local_name(e.local_name().as_ref()))),
            Event::Empty(e) => {
                let name = local_name(e.local_name().as_ref());
                let parent = stack.last_mut().expect("parse stack never empty");
                insert(&mut parent.children, name, Value::Null);
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(xml_err)?;
                stack
                    .last_mut()
                    .expect("parse stack never empty")
                    .text
                    .push_str(&text);
            }
            Event::CData(t) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                stack
                    .last_mut()
                    .expect("parse stack never empty")
                    .text
                    .push_str(&text);
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(SwsimError::Xml("unbalanced closing tag".to_string()));
                }
                let node = stack.pop().expect("checked above");
                let name = node.name.clone();
                let value = node.into_value();
                let parent = stack.last_mut().expect("parse stack never empty");
                insert(&mut parent.children, name, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = stack.pop().ok_or_else(|| {
        SwsimError::Xml("document ended before the envelope closed".to_string())
    })?;
    if !stack.is_empty() {
        return Err(SwsimError::Xml("unclosed elements in envelope".to_string()));
    }

    let body = root
        .children
        .get("Envelope")
        .and_then(|envelope| envelope.get("Body"))
        .cloned()
        .ok_or_else(|| SwsimError::Xml("response carried no soap Body".to_string()))?;

    match body {
        Value::Object(mut map) => {
            let fault = map.remove("Fault").map(|f| Fault {
                fault_string: f
                    .get("faultstring")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown fault")
                    .to_string(),
                fault_code: f
                    .get("faultcode")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
            Ok((fault, Value::Object(map)))
        }
        Value::Null => Ok((None, Value::Object(Map::new()))),
        other => Ok((None, other)),
    }
}
