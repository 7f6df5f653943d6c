//! Decoding SOAP envelopes to messages
//!
//! The decoder walks the XML events once and keeps the text of the
//! requested child elements found inside the operation element. Namespace
//! prefixes are ignored; only local names are compared.

use std::collections::{HashMap, HashSet};

use evtrip_core::{TripRequest, TripResult};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{SoapError, SoapResult};
use crate::fault::{Fault, FaultCode};
use crate::{REQUEST_ELEMENT, RESPONSE_ELEMENT};

/// Decode a `calculateTripTimeRequest` envelope
pub fn decode_request(xml: &str) -> SoapResult<TripRequest> {
    let scan = scan(xml, REQUEST_ELEMENT, &["distance", "autonomy", "chargingTime"])?;
    if !scan.found {
        return Err(SoapError::MissingElement(REQUEST_ELEMENT));
    }

    Ok(TripRequest {
        distance: scan.double("distance")?,
        autonomy: scan.double("autonomy")?,
        charging_time: scan.double("chargingTime")?,
    })
}

/// Decode a `calculateTripTimeResponse` envelope
pub fn decode_response(xml: &str) -> SoapResult<TripResult> {
    let scan = scan(xml, RESPONSE_ELEMENT, &["tripTime"])?;
    if !scan.found {
        return Err(SoapError::MissingElement(RESPONSE_ELEMENT));
    }

    Ok(TripResult {
        trip_time: scan.double("tripTime")?,
    })
}

/// Decode a SOAP fault, if the envelope carries one
pub fn decode_fault(xml: &str) -> SoapResult<Option<Fault>> {
    let scan = scan(xml, "Fault", &["faultcode", "faultstring"])?;
    if !scan.found {
        return Ok(None);
    }

    let code = scan
        .values
        .get("faultcode")
        .map(|raw| FaultCode::parse(raw))
        .unwrap_or(FaultCode::Server);
    let message = scan.values.get("faultstring").cloned().unwrap_or_default();

    Ok(Some(Fault { code, message }))
}

/// Text collected from one operation element
struct Scan {
    found: bool,
    values: HashMap<&'static str, String>,
}

impl Scan {
    fn double(&self, field: &'static str) -> SoapResult<f64> {
        let raw = self
            .values
            .get(field)
            .ok_or(SoapError::MissingField(field))?;
        raw.trim().parse().map_err(|_| SoapError::InvalidNumber {
            field,
            value: raw.clone(),
        })
    }
}

fn scan(xml: &str, element: &str, fields: &[&'static str]) -> SoapResult<Scan> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    // Depth of the operation element on the stack, while inside it
    let mut inside: Option<usize> = None;
    let mut found = false;
    let mut values = HashMap::new();
    let mut seen: HashSet<&'static str> = HashSet::new();

    loop {
        match reader.read_event().map_err(|e| SoapError::Xml(e.to_string()))? {
            Event::Start(start) => {
                let name = local_name(start.local_name().as_ref())?;
                if inside.is_none() && name == element {
                    found = true;
                    inside = Some(stack.len() + 1);
                } else if inside.is_some() {
                    mark_seen(&mut seen, fields, &name)?;
                }
                stack.push(name);
            }
            Event::Empty(empty) => {
                let name = local_name(empty.local_name().as_ref())?;
                if inside.is_none() && name == element {
                    found = true;
                } else if inside.is_some() {
                    mark_seen(&mut seen, fields, &name)?;
                }
            }
            Event::End(_) => {
                if inside == Some(stack.len()) {
                    inside = None;
                }
                stack.pop();
            }
            Event::Text(text) => {
                if inside.is_some() {
                    let value = text
                        .unescape()
                        .map_err(|e| SoapError::Xml(e.to_string()))?;
                    collect(&stack, fields, &mut values, &value);
                }
            }
            Event::CData(cdata) => {
                if inside.is_some() {
                    let bytes = cdata.into_inner();
                    let value = std::str::from_utf8(&bytes)
                        .map_err(|e| SoapError::Xml(e.to_string()))?;
                    collect(&stack, fields, &mut values, value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Scan { found, values })
}

/// Record an opening field element; each field may appear once
fn mark_seen(
    seen: &mut HashSet<&'static str>,
    fields: &[&'static str],
    name: &str,
) -> SoapResult<()> {
    match fields.iter().find(|f| **f == name) {
        Some(field) if !seen.insert(*field) => Err(SoapError::DuplicateField(*field)),
        _ => Ok(()),
    }
}

fn collect(
    stack: &[String],
    fields: &[&'static str],
    values: &mut HashMap<&'static str, String>,
    text: &str,
) {
    let Some(current) = stack.last() else {
        return;
    };
    if let Some(field) = fields.iter().find(|f| **f == current.as_str()) {
        values
            .entry(*field)
            .and_modify(|v| v.push_str(text))
            .or_insert_with(|| text.to_string());
    }
}

fn local_name(raw: &[u8]) -> SoapResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| SoapError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_fault, encode_request, encode_response};
    use pretty_assertions::assert_eq;

    const FOREIGN_REQUEST: &str = r#"<?xml version="1.0"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"
                  xmlns:ts="http://example.com/tripService">
  <soapenv:Header/>
  <soapenv:Body>
    <ts:calculateTripTimeRequest>
      <distance> 450.5 </distance>
      <autonomy>300</autonomy>
      <chargingTime>45</chargingTime>
    </ts:calculateTripTimeRequest>
  </soapenv:Body>
</soapenv:Envelope>"#;

    #[test]
    fn request_with_other_prefixes() {
        let request = decode_request(FOREIGN_REQUEST).unwrap();
        assert_eq!(request, TripRequest::new(450.5, 300.0, 45.0));
    }

    #[test]
    fn request_survives_encoding() {
        let request = TripRequest::new(299.999, 100.0, 0.0);
        assert_eq!(decode_request(&encode_request(&request)).unwrap(), request);
    }

    #[test]
    fn missing_field() {
        let xml = FOREIGN_REQUEST.replace("<autonomy>300</autonomy>", "");
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::MissingField("autonomy")
        );
    }

    #[test]
    fn empty_field_counts_as_missing() {
        let xml = FOREIGN_REQUEST.replace("<autonomy>300</autonomy>", "<autonomy/>");
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::MissingField("autonomy")
        );
    }

    #[test]
    fn non_numeric_field() {
        let xml = FOREIGN_REQUEST.replace("<autonomy>300</autonomy>", "<autonomy>far</autonomy>");
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::InvalidNumber {
                field: "autonomy",
                value: "far".to_string()
            }
        );
    }

    #[test]
    fn repeated_field_is_rejected() {
        let xml = FOREIGN_REQUEST.replace(
            "<distance> 450.5 </distance>",
            "<distance>1</distance><distance>2</distance>",
        );
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::DuplicateField("distance")
        );
    }

    #[test]
    fn repeated_empty_field_is_rejected() {
        let xml = FOREIGN_REQUEST.replace(
            "<autonomy>300</autonomy>",
            "<autonomy/><autonomy>3</autonomy>",
        );
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::DuplicateField("autonomy")
        );
    }

    #[test]
    fn text_split_by_comment_and_cdata_is_joined() {
        let xml = FOREIGN_REQUEST.replace(
            "<autonomy>300</autonomy>",
            "<autonomy>3<!-- range --><![CDATA[0]]>0</autonomy>",
        );
        assert_eq!(decode_request(&xml).unwrap().autonomy, 300.0);
    }

    #[test]
    fn xsd_special_doubles_are_decoded() {
        let xml = FOREIGN_REQUEST.replace("<autonomy>300</autonomy>", "<autonomy>INF</autonomy>");
        assert!(decode_request(&xml).unwrap().autonomy.is_infinite());
    }

    #[test]
    fn fields_outside_operation_are_ignored() {
        let xml = r#"<Envelope><Header><distance>1</distance></Header>
            <Body><calculateTripTimeRequest><autonomy>1</autonomy>
            <chargingTime>1</chargingTime></calculateTripTimeRequest></Body></Envelope>"#;
        assert_eq!(
            decode_request(xml).unwrap_err(),
            SoapError::MissingField("distance")
        );
    }

    #[test]
    fn wrong_operation() {
        let xml = encode_response(&TripResult { trip_time: 1.0 });
        assert_eq!(
            decode_request(&xml).unwrap_err(),
            SoapError::MissingElement("calculateTripTimeRequest")
        );
    }

    #[test]
    fn malformed_xml() {
        let err = decode_request("<Envelope><Body></Envelope>").unwrap_err();
        assert!(matches!(err, SoapError::Xml(_)));
    }

    #[test]
    fn response() {
        let xml = encode_response(&TripResult { trip_time: 3.5 });
        assert_eq!(decode_response(&xml).unwrap().trip_time, 3.5);
    }

    #[test]
    fn fault_is_detected() {
        let xml = encode_fault(&Fault::client("autonomy must be greater than 0"));
        let fault = decode_fault(&xml).unwrap().unwrap();
        assert_eq!(fault, Fault::client("autonomy must be greater than 0"));
    }

    #[test]
    fn no_fault_in_regular_response() {
        let xml = encode_response(&TripResult { trip_time: 3.5 });
        assert_eq!(decode_fault(&xml).unwrap(), None);
    }
}
