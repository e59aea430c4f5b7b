//! Synthetic PDF fixtures.
//!
//! Builds just enough PDF and DER structure for the scanners: signature
//! dictionaries whose `/Contents` holds a hand-assembled attribute list
//! rather than a real PKCS#7 container.

#![allow(dead_code)]

/// DER OID 2.5.4.3 (commonName), tag and length not included.
pub const OID_CN: &[u8] = &[0x06, 0x03, 0x55, 0x04, 0x03];

/// DER OID 2.5.4.11 (organizationalUnitName).
pub const OID_OU: &[u8] = &[0x06, 0x03, 0x55, 0x04, 0x0b];

/// id-aa-timeStampToken content bytes.
pub const OID_TSA: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x10, 0x02, 0x0e];

/// Padding that keeps neighbouring signature windows apart.
pub const SEPARATION: usize = 80_000;

/// `OID tag len value`.
pub fn attribute(oid: &[u8], tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = oid.to_vec();
    out.push(tag);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

/// UTF-16BE without byte-order mark.
pub fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
}

/// One signature dictionary.
#[derive(Debug, Clone, Default)]
pub struct SignatureFixture {
    pub date: Option<String>,
    pub common_names: Vec<(u8, Vec<u8>)>,
    pub org_unit: Option<String>,
    pub tsa: bool,
    pub name_entry: Option<Vec<u8>>,
    pub raw_contents: Option<String>,
}

impl SignatureFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, digits: &str) -> Self {
        self.date = Some(digits.to_string());
        self
    }

    pub fn common_name(mut self, name: &str) -> Self {
        self.common_names.push((0x0c, name.as_bytes().to_vec()));
        self
    }

    pub fn printable_common_name(mut self, name: &str) -> Self {
        self.common_names.push((0x13, name.as_bytes().to_vec()));
        self
    }

    pub fn bmp_common_name(mut self, name: &str) -> Self {
        self.common_names.push((0x1e, utf16be(name)));
        self
    }

    pub fn org_unit(mut self, value: &str) -> Self {
        self.org_unit = Some(value.to_string());
        self
    }

    pub fn tsa(mut self) -> Self {
        self.tsa = true;
        self
    }

    /// Raw `/Name` token, including its delimiters.
    pub fn name_entry(mut self, token: &[u8]) -> Self {
        self.name_entry = Some(token.to_vec());
        self
    }

    /// Replace the generated `/Contents` body verbatim.
    pub fn raw_contents(mut self, body: &str) -> Self {
        self.raw_contents = Some(body.to_string());
        self
    }

    pub fn der(&self) -> Vec<u8> {
        // SEQUENCE header, content is not length-checked by the scanner
        let mut der = vec![0x30, 0x82, 0x01, 0x00];
        if let Some(ou) = &self.org_unit {
            der.extend(attribute(OID_OU, 0x0c, ou.as_bytes()));
        }
        for (tag, value) in &self.common_names {
            der.extend(attribute(OID_CN, *tag, value));
        }
        if self.tsa {
            der.extend_from_slice(&[0x06, 0x0b]);
            der.extend_from_slice(OID_TSA);
        }
        der
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"<< /Type /Sig /Filter /Adobe.PPKLite /SubFilter /ETSI.CAdES.detached\n");
        if let Some(name) = &self.name_entry {
            out.extend_from_slice(b"/Name ");
            out.extend_from_slice(name);
            out.push(b'\n');
        }
        if let Some(date) = &self.date {
            out.extend_from_slice(format!("/M (D:{}+01'00')\n", date).as_bytes());
        }
        let contents = match &self.raw_contents {
            Some(body) => body.clone(),
            None => format!("{}{}", hex::encode_upper(self.der()), "0".repeat(64)),
        };
        out.extend_from_slice(format!("/Contents <{}>\n", contents).as_bytes());
        out.extend_from_slice(b"/ByteRange [0 1000 5000 2000] >>\n");
        out
    }
}

/// A document holding `signatures` far enough apart that their windows do
/// not see each other's fields.
pub fn document(pdfa_part: Option<u8>, signatures: &[SignatureFixture]) -> Vec<u8> {
    let mut out = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n".to_vec();
    if let Some(part) = pdfa_part {
        out.extend_from_slice(
            format!(
                "<rdf:Description rdf:about=\"\" pdfaid:part=\"{}\" pdfaid:conformance=\"B\"/>\n",
                part
            )
            .as_bytes(),
        );
    }
    out.extend_from_slice(b"1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n");

    for (i, sig) in signatures.iter().enumerate() {
        out.extend(std::iter::repeat(b' ').take(SEPARATION));
        out.extend_from_slice(format!("{} 0 obj\n", i + 10).as_bytes());
        out.extend(sig.to_bytes());
        out.extend_from_slice(b"endobj\n");
    }

    out.extend_from_slice(b"trailer << /Root 1 0 R >>\n%%EOF\n");
    out
}
