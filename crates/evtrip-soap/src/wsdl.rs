//! WSDL contract of the trip service

use quick_xml::escape::escape;

const LOCATION_PLACEHOLDER: &str = "{{location}}";

const WSDL_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<definitions name="TripService"
             targetNamespace="http://example.com/tripService"
             xmlns="http://schemas.xmlsoap.org/wsdl/"
             xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
             xmlns:tns="http://example.com/tripService"
             xmlns:xsd="http://www.w3.org/2001/XMLSchema">

  <types>
    <xsd:schema targetNamespace="http://example.com/tripService">
      <xsd:element name="calculateTripTimeRequest">
        <xsd:complexType>
          <xsd:sequence>
            <xsd:element name="distance" type="xsd:double"/>
            <xsd:element name="autonomy" type="xsd:double"/>
            <xsd:element name="chargingTime" type="xsd:double"/>
          </xsd:sequence>
        </xsd:complexType>
      </xsd:element>

      <xsd:element name="calculateTripTimeResponse">
        <xsd:complexType>
          <xsd:sequence>
            <xsd:element name="tripTime" type="xsd:double"/>
          </xsd:sequence>
        </xsd:complexType>
      </xsd:element>
    </xsd:schema>
  </types>

  <message name="calculateTripTimeRequest">
    <part name="parameters" element="tns:calculateTripTimeRequest"/>
  </message>
  <message name="calculateTripTimeResponse">
    <part name="parameters" element="tns:calculateTripTimeResponse"/>
  </message>

  <portType name="TripServicePortType">
    <operation name="calculateTripTime">
      <input message="tns:calculateTripTimeRequest"/>
      <output message="tns:calculateTripTimeResponse"/>
    </operation>
  </portType>

  <binding name="TripServiceBinding" type="tns:TripServicePortType">
    <soap:binding style="document" transport="http://schemas.xmlsoap.org/soap/http"/>
    <operation name="calculateTripTime">
      <soap:operation soapAction="http://example.com/tripService#calculateTripTime"/>
      <input><soap:body use="literal"/></input>
      <output><soap:body use="literal"/></output>
    </operation>
  </binding>

  <service name="TripService">
    <documentation>Estimates the duration of an electric vehicle trip</documentation>
    <port name="TripServicePort" binding="tns:TripServiceBinding">
      <soap:address location="{{location}}"/>
    </port>
  </service>
</definitions>
"#;

/// Render the WSDL with the endpoint address the service is reachable at
pub fn wsdl_document(location: &str) -> String {
    WSDL_TEMPLATE.replace(LOCATION_PLACEHOLDER, &escape(location))
}
