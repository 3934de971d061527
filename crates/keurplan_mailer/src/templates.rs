// --- File: crates/keurplan_mailer/src/templates.rs ---
//! HTML bodies for the three transactional notices.
//!
//! The route layer renders these and hands the finished body to the mail
//! client; nothing here touches the network. The join rules are part of the
//! contract: a `/`-separated multi-type value renders `" + "`-joined in the
//! request notice, and the visit-change notice joins its type list with
//! `" & "`.

/// Render a `/`-separated inspection type value for display.
///
/// "electrical/gas" becomes "electrical + gas"; a single type passes
/// through unchanged.
pub fn format_inspection_type(inspection_type: &str) -> String {
    inspection_type
        .split('/')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Join a list of inspection types for the visit-change notice.
pub fn join_inspection_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| t.trim())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Body for the new-inspection-request notice.
pub fn render_new_request(inspection_type: &str, link: &str) -> String {
    let display_type = format_inspection_type(inspection_type);
    format!(
        "<p>A new inspection request has come in for <strong>{display_type}</strong>.</p>\
         <p>Open the request: <a href=\"{link}\">{link}</a></p>"
    )
}

/// Body for the certificate-available notice.
pub fn render_certificate_available(
    inspection_type: &str,
    location: &str,
    klant: &str,
    link: &str,
) -> String {
    let display_type = format_inspection_type(inspection_type);
    format!(
        "<p>The <strong>{display_type}</strong> certificate for {location} is now available.</p>\
         <p>Client: {klant}</p>\
         <p>Download the certificate: <a href=\"{link}\">{link}</a></p>"
    )
}

/// Body for the visit-date-change notice.
pub fn render_updated_visit_date(
    date: &str,
    types: &[String],
    location: &str,
    klant: &str,
) -> String {
    let display_types = join_inspection_types(types);
    format!(
        "<p>The visit date for the <strong>{display_types}</strong> inspection at {location} \
         has changed.</p>\
         <p>New date: <strong>{date}</strong></p>\
         <p>Client: {klant}</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_separated_types_render_plus_joined() {
        assert_eq!(format_inspection_type("electrical/gas"), "electrical + gas");
        assert_eq!(format_inspection_type("electrical"), "electrical");
        assert_eq!(format_inspection_type("epc / gas"), "epc + gas");
    }

    #[test]
    fn type_lists_render_ampersand_joined() {
        let types = vec!["electrical".to_string(), "gas".to_string()];
        assert_eq!(join_inspection_types(&types), "electrical & gas");
        assert_eq!(join_inspection_types(&types[..1]), "electrical");
    }

    #[test]
    fn new_request_body_contains_type_and_link() {
        let body = render_new_request("electrical/gas", "https://keurplan.be/r/42");
        assert!(body.contains("electrical + gas"));
        assert!(body.contains("https://keurplan.be/r/42"));
    }

    #[test]
    fn certificate_body_contains_all_fields() {
        let body = render_certificate_available(
            "epc",
            "Stationsstraat 4, Gent",
            "Familie Peeters",
            "https://keurplan.be/c/7",
        );
        assert!(body.contains("epc"));
        assert!(body.contains("Stationsstraat 4, Gent"));
        assert!(body.contains("Familie Peeters"));
        assert!(body.contains("https://keurplan.be/c/7"));
    }

    #[test]
    fn updated_visit_body_joins_types_with_ampersand() {
        let body = render_updated_visit_date(
            "2026-03-05",
            &["electrical".to_string(), "gas".to_string()],
            "Gentsesteenweg 12, Aalst",
            "Familie Claes",
        );
        assert!(body.contains("electrical & gas"));
        assert!(body.contains("2026-03-05"));
        assert!(body.contains("Gentsesteenweg 12, Aalst"));
        assert!(body.contains("Familie Claes"));
    }
}
