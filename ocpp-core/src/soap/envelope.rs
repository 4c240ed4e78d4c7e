use quick_xml::escape::escape;

use super::xml::{self, Element};
use crate::error::Error;
use crate::format::error::ErrorCode;
use crate::ids::ChargeBoxId;
use crate::node::Record;

pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";
pub const WSA_NS: &str = "http://www.w3.org/2005/08/addressing";

/// Out-of-band metadata carried in the SOAP header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoapHeader {
    pub charge_box_identity: Option<ChargeBoxId>,
    /// WS-Addressing action, `/BootNotification` or `/BootNotificationResponse`.
    pub action: Option<String>,
    pub message_id: Option<String>,
    pub relates_to: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SoapBody {
    Request { action: String, payload: Record },
    Response { action: String, payload: Record },
    Fault { code: ErrorCode, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoapEnvelope {
    pub header: SoapHeader,
    pub body: SoapBody,
}

/// `BootNotification` + `Request` -> `bootNotificationRequest`
pub fn body_element(action: &str, suffix: &str) -> String {
    let mut chars = action.chars();
    match chars.next() {
        Some(first) => format!("{}{}{suffix}", first.to_lowercase(), chars.as_str()),
        None => suffix.to_owned(),
    }
}

fn action_name(element: &str, suffix: &str) -> Option<String> {
    let stem = element.strip_suffix(suffix)?;
    let mut chars = stem.chars();
    let first = chars.next()?;
    Some(format!("{}{}", first.to_uppercase(), chars.as_str()))
}

fn text_element(out: &mut String, name: &str, text: &str, must_understand: bool) {
    out.push('<');
    out.push_str(name);
    if must_understand {
        out.push_str(" s:mustUnderstand=\"true\"");
    }
    out.push('>');
    out.push_str(&escape(text));
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

impl SoapEnvelope {
    pub fn encode(&self, namespace: &str) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push_str(&format!(
            r#"<s:Envelope xmlns:s="{SOAP_ENV_NS}" xmlns:wsa="{WSA_NS}" xmlns:ocpp="{namespace}">"#
        ));

        out.push_str("<s:Header>");
        let header = &self.header;
        if let Some(identity) = &header.charge_box_identity {
            text_element(&mut out, "ocpp:chargeBoxIdentity", identity.as_str(), true);
        }
        if let Some(action) = &header.action {
            text_element(&mut out, "wsa:Action", action, true);
        }
        if let Some(message_id) = &header.message_id {
            text_element(&mut out, "wsa:MessageID", message_id, false);
        }
        if let Some(relates_to) = &header.relates_to {
            text_element(&mut out, "wsa:RelatesTo", relates_to, false);
        }
        if let Some(from) = &header.from {
            out.push_str("<wsa:From>");
            text_element(&mut out, "wsa:Address", from, false);
            out.push_str("</wsa:From>");
        }
        if let Some(to) = &header.to {
            text_element(&mut out, "wsa:To", to, true);
        }
        out.push_str("</s:Header>");

        out.push_str("<s:Body>");
        let default_ns = format!(" xmlns=\"{namespace}\"");
        match &self.body {
            SoapBody::Request { action, payload } => {
                xml::write_record(&mut out, &body_element(action, "Request"), payload, &default_ns)
            }
            SoapBody::Response { action, payload } => {
                xml::write_record(&mut out, &body_element(action, "Response"), payload, &default_ns)
            }
            SoapBody::Fault { code, reason } => {
                let class = match code {
                    ErrorCode::InternalError | ErrorCode::GenericError => "s:Receiver",
                    _ => "s:Sender",
                };
                out.push_str("<s:Fault><s:Code>");
                text_element(&mut out, "s:Value", class, false);
                out.push_str("<s:Subcode>");
                text_element(&mut out, "s:Value", code.as_str(), false);
                out.push_str("</s:Subcode></s:Code><s:Reason>");
                out.push_str(r#"<s:Text xml:lang="en">"#);
                out.push_str(&escape(reason.as_str()));
                out.push_str("</s:Text></s:Reason></s:Fault>");
            }
        }
        out.push_str("</s:Body></s:Envelope>");
        out
    }

    pub fn decode(raw: &str) -> Result<Self, Error> {
        let root = xml::parse_document(raw)?;
        if root.name != "Envelope" {
            return Err(Error::Soap(format!("expected Envelope, found {}", root.name)));
        }
        let header = match root.child("Header") {
            Some(header) => decode_header(header)?,
            None => SoapHeader::default(),
        };
        let body = root
            .child("Body")
            .ok_or_else(|| Error::Soap("missing Body".into()))?;
        let content = body
            .children
            .first()
            .ok_or_else(|| Error::Soap("empty Body".into()))?;
        let body = if content.name == "Fault" {
            decode_fault(content)
        } else if let Some(action) = action_name(&content.name, "Request") {
            SoapBody::Request {
                action,
                payload: content.to_record(),
            }
        } else if let Some(action) = action_name(&content.name, "Response") {
            SoapBody::Response {
                action,
                payload: content.to_record(),
            }
        } else {
            return Err(Error::Soap(format!(
                "body element {} is neither a request nor a response",
                content.name
            )));
        };
        Ok(Self { header, body })
    }
}

fn optional_text(parent: &Element, name: &str) -> Option<String> {
    parent
        .child(name)
        .map(|e| e.trimmed_text().to_owned())
        .filter(|s| !s.is_empty())
}

fn decode_header(header: &Element) -> Result<SoapHeader, Error> {
    let charge_box_identity = match optional_text(header, "chargeBoxIdentity") {
        Some(identity) => Some(ChargeBoxId::new(identity)?),
        None => None,
    };
    Ok(SoapHeader {
        charge_box_identity,
        action: optional_text(header, "Action"),
        message_id: optional_text(header, "MessageID"),
        relates_to: optional_text(header, "RelatesTo"),
        from: header.child("From").and_then(|from| optional_text(from, "Address")),
        to: optional_text(header, "To"),
    })
}

fn decode_fault(fault: &Element) -> SoapBody {
    let subcode = fault
        .child("Code")
        .and_then(|code| code.child("Subcode"))
        .and_then(|sub| optional_text(sub, "Value"));
    let code = subcode
        .as_deref()
        .map(|value| value.rsplit(':').next().unwrap_or(value))
        .and_then(|code| code.parse::<ErrorCode>().ok())
        .unwrap_or(ErrorCode::GenericError);
    let reason = fault
        .child("Reason")
        .and_then(|reason| optional_text(reason, "Text"))
        .unwrap_or_default();
    SoapBody::Fault { code, reason }
}
