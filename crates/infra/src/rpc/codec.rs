//! Wire encoding for XML-RPC calls and responses.
//!
//! Calls are rendered straight into a string. Responses are read with
//! `quick-xml` into a small element tree first, then interpreted; text is
//! kept verbatim (no trimming) except where a numeric type is parsed.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::value::RpcValue;
use crate::errors::RpcError;

/// Render a `<methodCall>` document.
pub fn encode_call(method: &str, params: &[RpcValue]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push_str("<methodCall><methodName>");
    xml.push_str(&escape(method));
    xml.push_str("</methodName><params>");
    for param in params {
        xml.push_str("<param>");
        write_value(&mut xml, param);
        xml.push_str("</param>");
    }
    xml.push_str("</params></methodCall>");
    xml
}

/// Decode a `<methodResponse>` document.
///
/// A fault response becomes [`RpcError::Fault`]. A response without a
/// parameter decodes to [`RpcValue::Nil`].
pub fn decode_response(xml: &str) -> Result<RpcValue, RpcError> {
    let root = parse_document(xml)?;
    if root.name != "methodResponse" {
        return Err(malformed(format!("expected <methodResponse>, found <{}>", root.name)));
    }

    let body = root
        .children
        .first()
        .ok_or_else(|| malformed("empty <methodResponse>".to_string()))?;

    match body.name.as_str() {
        "params" => match body.children.first() {
            Some(param) => parse_value(param.child("value")?),
            None => Ok(RpcValue::Nil),
        },
        "fault" => Err(parse_fault(body.child("value")?)?),
        other => Err(malformed(format!("unexpected <{other}> in <methodResponse>"))),
    }
}

fn write_value(out: &mut String, value: &RpcValue) {
    out.push_str("<value>");
    match value {
        RpcValue::Int(number) => tagged(out, value.type_name(), &number.to_string()),
        RpcValue::Bool(flag) => tagged(out, value.type_name(), if *flag { "1" } else { "0" }),
        RpcValue::Double(number) => tagged(out, value.type_name(), &number.to_string()),
        RpcValue::String(text) | RpcValue::DateTime(text) | RpcValue::Base64(text) => {
            tagged(out, value.type_name(), &escape(text));
        }
        RpcValue::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name));
                out.push_str("</name>");
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
        RpcValue::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        RpcValue::Nil => out.push_str("<nil/>"),
    }
    out.push_str("</value>");
}

fn tagged(out: &mut String, tag: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/* -------------------------------------------------------------------------- */
/* Element tree */
/* -------------------------------------------------------------------------- */

#[derive(Debug)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn named(raw: &[u8]) -> Result<Self, RpcError> {
        let name = std::str::from_utf8(raw).map_err(|err| malformed(err.to_string()))?;
        Ok(Self { name: name.to_string(), text: String::new(), children: Vec::new() })
    }

    fn child(&self, name: &str) -> Result<&Element, RpcError> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .ok_or_else(|| malformed(format!("<{}> has no <{name}>", self.name)))
    }
}

fn parse_document(xml: &str) -> Result<Element, RpcError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(Element::named(start.local_name().as_ref())?),
            Event::Empty(start) => {
                let element = Element::named(start.local_name().as_ref())?;
                close(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                let element =
                    open.pop().ok_or_else(|| malformed("unbalanced closing tag".to_string()))?;
                close(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    let text = text.unescape().map_err(|err| malformed(err.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    let text =
                        std::str::from_utf8(&data).map_err(|err| malformed(err.to_string()))?;
                    current.text.push_str(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(malformed(format!("document ends inside <{}>", unclosed.name)));
    }
    root.ok_or_else(|| malformed("document has no root element".to_string()))
}

fn close(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), RpcError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(malformed("more than one root element".to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Values */
/* -------------------------------------------------------------------------- */

fn parse_value(element: &Element) -> Result<RpcValue, RpcError> {
    if element.name != "value" {
        return Err(malformed(format!("expected <value>, found <{}>", element.name)));
    }

    // An untyped value is a string.
    let Some(typed) = element.children.first() else {
        return Ok(RpcValue::String(element.text.clone()));
    };

    let text = typed.text.as_str();
    match typed.name.as_str() {
        "int" | "i4" => text
            .trim()
            .parse()
            .map(RpcValue::Int)
            .map_err(|err| malformed(format!("invalid int '{text}': {err}"))),
        "boolean" => match text.trim() {
            "1" | "true" => Ok(RpcValue::Bool(true)),
            "0" | "false" => Ok(RpcValue::Bool(false)),
            other => Err(malformed(format!("invalid boolean '{other}'"))),
        },
        "double" => text
            .trim()
            .parse()
            .map(RpcValue::Double)
            .map_err(|err| malformed(format!("invalid double '{text}': {err}"))),
        "string" => Ok(RpcValue::String(text.to_string())),
        "dateTime.iso8601" => Ok(RpcValue::DateTime(text.trim().to_string())),
        "base64" => Ok(RpcValue::Base64(text.split_whitespace().collect())),
        "nil" => Ok(RpcValue::Nil),
        "struct" => typed
            .children
            .iter()
            .map(|member| -> Result<(String, RpcValue), RpcError> {
                let name = member.child("name")?.text.clone();
                let value = parse_value(member.child("value")?)?;
                Ok((name, value))
            })
            .collect::<Result<_, RpcError>>()
            .map(RpcValue::Struct),
        "array" => typed
            .child("data")?
            .children
            .iter()
            .map(parse_value)
            .collect::<Result<_, RpcError>>()
            .map(RpcValue::Array),
        other => Err(malformed(format!("unsupported value type <{other}>"))),
    }
}

fn parse_fault(value: &Element) -> Result<RpcError, RpcError> {
    let fault = parse_value(value)?;
    let code = fault
        .member("faultCode")
        .and_then(RpcValue::as_i32)
        .ok_or_else(|| malformed("fault without integer faultCode".to_string()))?;
    let message = fault.member("faultString").and_then(RpcValue::as_str).unwrap_or_default();

    Ok(RpcError::Fault { code, message: message.to_string() })
}

fn malformed(message: String) -> RpcError {
    RpcError::Decode(message)
}
