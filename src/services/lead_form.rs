/// Quotation lead forwarding
///
/// Hands each quotation request to an external form collector as a single
/// POST with the lead attributes in the query string. The request is
/// spawned and never awaited by the caller: no retry, no response parsing,
/// failures only reach the log.

use std::time::Duration;

use crate::config::{LeadFormConfig, LeadFormFields};
use crate::models::quotation::QuotationRequest;

#[derive(Clone, Debug)]
pub struct LeadFormClient {
    http: reqwest::Client,
    endpoint: String,
    fields: LeadFormFields,
}

/// Key/value pairs sent to the collector, in submission order.
pub fn form_pairs(fields: &LeadFormFields, lead: &QuotationRequest) -> Vec<(String, String)> {
    let system = &lead.system;
    vec![
        (fields.name.clone(),            lead.name.clone()),
        (fields.phone.clone(),           lead.phone.clone()),
        (fields.email.clone(),           lead.email.clone()),
        (fields.address.clone(),         lead.address.clone()),
        (fields.system_size.clone(),     system.system_size_kw.to_string()),
        (fields.panel_brand.clone(),     system.panel_brand.clone()),
        (fields.inverter_brand.clone(),  system.inverter_brand.clone()),
        (fields.location.clone(),        lead.location.clone()),
        (fields.channel_partner.clone(), lead.channel_partner.clone()),
    ]
}

impl LeadFormClient {
    pub fn new(cfg: &LeadFormConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_s.max(1)))
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            fields: cfg.fields.clone(),
        })
    }

    /// Fire-and-forget submission. Must be called from within a Tokio runtime.
    pub fn submit(&self, lead: &QuotationRequest) {
        let request = self
            .http
            .post(&self.endpoint)
            .query(&form_pairs(&self.fields, lead));
        let size_kw = lead.system.system_size_kw;

        tokio::spawn(async move {
            match request.send().await {
                Ok(resp) => tracing::info!(status = %resp.status(), size_kw, "lead forwarded"),
                Err(e) => tracing::warn!(error = %e, size_kw, "lead submission failed"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::models::quotation::SystemSelection;

    fn fields() -> LeadFormFields {
        LeadFormFields {
            name: "entry.691413308".into(),
            phone: "entry.213703165".into(),
            email: "entry.1165662622".into(),
            address: "entry.940713921".into(),
            system_size: "entry.1353442714".into(),
            panel_brand: "entry.1469352037".into(),
            inverter_brand: "entry.457794531".into(),
            location: "entry.2075284540".into(),
            channel_partner: "entry.581920847".into(),
        }
    }

    fn lead() -> QuotationRequest {
        QuotationRequest {
            name: "Anita Rao".into(),
            email: "anita@example.com".into(),
            phone: "+91 9000000001".into(),
            address: "12 MG Road".into(),
            location: "Hyderabad".into(),
            channel_partner: "Partner B".into(),
            roof_type: "concrete".into(),
            installation_type: "grid-tie".into(),
            system: SystemSelection {
                system_size_kw: 8,
                panel_brand: "adani".into(),
                inverter_brand: "delta".into(),
                wiring_brand: "kei".into(),
            },
        }
    }

    #[test]
    fn test_form_pairs_follow_field_map() {
        let pairs = form_pairs(&fields(), &lead());
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs[0], ("entry.691413308".to_string(), "Anita Rao".to_string()));
        assert_eq!(pairs[4], ("entry.1353442714".to_string(), "8".to_string()));
        assert_eq!(pairs[8], ("entry.581920847".to_string(), "Partner B".to_string()));
        // wiring brand is not part of the collected lead
        assert!(pairs.iter().all(|(_, v)| v != "kei"));
    }

    #[tokio::test]
    async fn test_submit_posts_pairs_in_query_string() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = LeadFormClient::new(&LeadFormConfig {
            endpoint: format!("http://{addr}/formResponse"),
            request_timeout_s: 5,
            fields: fields(),
        })
        .unwrap();

        client.submit(&lead());

        let (mut socket, _) = tokio::time::timeout(Duration::from_secs(5), listener.accept())
            .await
            .expect("no lead submission received")
            .unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before end of request head");
            head.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
            .await
            .unwrap();

        let head = String::from_utf8(head).unwrap();
        assert_eq!(
            head.lines().next().unwrap(),
            "POST /formResponse?entry.691413308=Anita+Rao&entry.213703165=%2B91+9000000001\
             &entry.1165662622=anita%40example.com&entry.940713921=12+MG+Road\
             &entry.1353442714=8&entry.1469352037=adani&entry.457794531=delta\
             &entry.2075284540=Hyderabad&entry.581920847=Partner+B HTTP/1.1"
        );
    }
}
