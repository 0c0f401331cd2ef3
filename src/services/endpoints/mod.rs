// ============================================================================
// ENDPOINTS - Una función por endpoint del backend, agrupadas por recurso
// ============================================================================

pub mod admin;
pub mod auth;
pub mod check_item;
pub mod doctor;
pub mod emr;
pub mod knowledge_base;
pub mod lab;
pub mod payment;
pub mod pharmacy;
pub mod queue;
pub mod registration;
pub mod schedule;
pub mod triage;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use check_item::CheckItemApi;
pub use doctor::DoctorApi;
pub use emr::EmrApi;
pub use knowledge_base::KnowledgeBaseApi;
pub use lab::LabApi;
pub use payment::PaymentApi;
pub use pharmacy::PharmacyApi;
pub use queue::QueueApi;
pub use registration::RegistrationApi;
pub use schedule::ScheduleApi;
pub use triage::TriageApi;

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::NaiveDate;
    use serde_json::json;

    use crate::config::AppConfig;
    use crate::models::*;
    use crate::services::api_client::ApiClient;
    use crate::services::notifier::LogNotifier;
    use crate::services::transport::mock::MockTransport;
    use crate::services::transport::{FilePart, HttpMethod, HttpResponse, RequestBody, ResponseKind};
    use crate::state::SessionStore;
    use crate::utils::constants::SPREADSHEET_CONTENT_TYPE;
    use crate::utils::storage::MemoryStorage;

    fn client() -> (ApiClient<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let session = SessionStore::rehydrate(Rc::new(MemoryStorage::new()));
        let client = ApiClient::new(transport.clone(), session, Rc::new(LogNotifier), &AppConfig::default());
        (client, transport)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// (método, url, query) de cada petición registrada
    fn calls(transport: &MockTransport) -> Vec<(HttpMethod, String, Vec<(String, String)>)> {
        transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url, r.query))
            .collect()
    }

    fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn auth_endpoints() {
        let (client, transport) = client();
        transport.ok(json!({ "token": "t", "userId": 3, "role": "ADMIN" }));
        let login = client.auth().admin_login(&LoginRequest::staff("admin", "123456")).await.unwrap();
        assert_eq!(login.token, "t");
        assert_eq!(login.profile.role(), Some(Role::Admin));

        transport.ok(json!({ "token": "p", "patientId": 11 }));
        client.auth().patient_login(&LoginRequest::patient("13800000000", "pw")).await.unwrap();
        transport.ok(json!({ "patientId": 11, "name": "Wang" }));
        transport.ok(json!({ "userId": 3, "role": "ADMIN" }));
        assert_eq!(client.auth().patient(11).await.unwrap().name.as_deref(), Some("Wang"));
        client.auth().staff(3).await.unwrap();
        client.auth().demo_info().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "/api/auth/staff/login");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({ "username": "admin", "password": "123456", "userType": "staff" }))
        );
        assert_eq!(requests[1].url, "/api/auth/patient/login");
        assert_eq!(requests[2].url, "/api/auth/patient/11");
        assert_eq!(requests[3].url, "/api/auth/staff/3");
        assert_eq!(requests[4].url, "/api/auth/demo-info");
    }

    #[tokio::test]
    async fn schedule_list_sends_iso_dates() {
        let (client, transport) = client();
        transport.ok(json!([{ "scheduleId": 1, "date": "2024-06-03", "quotaLeft": 2 }]));
        let slots = client.schedule().list(5, date(2024, 6, 3), date(2024, 6, 9)).await.unwrap();
        assert_eq!(slots[0].date, Some(date(2024, 6, 3)));

        transport.ok(json!([]));
        transport.ok(json!({ "deptId": 5 }));
        client.schedule().doctors(5).await.unwrap();
        client.schedule().department(5).await.unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (
                    HttpMethod::Get,
                    "/api/schedule/list".into(),
                    q(&[("deptId", "5"), ("startDate", "2024-06-03"), ("endDate", "2024-06-09")])
                ),
                (HttpMethod::Get, "/api/schedule/doctors".into(), q(&[("deptId", "5")])),
                (HttpMethod::Get, "/api/schedule/department/5".into(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn registration_lifecycle_paths() {
        let (client, transport) = client();
        client
            .registration()
            .create(&RegistrationRequest { patient_id: 1, schedule_id: 9 })
            .await
            .unwrap_or_default();
        client.registration().pay(20).await.unwrap();
        client.registration().check_in(&CheckInRequest { reg_id: 20 }).await.unwrap();
        client.registration().cancel(20).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].body, RequestBody::Json(json!({ "patientId": 1, "scheduleId": 9 })));
        let urls: Vec<_> = requests.iter().map(|r| (r.method, r.url.as_str())).collect();
        assert_eq!(
            urls,
            vec![
                (HttpMethod::Post, "/api/registration/create"),
                (HttpMethod::Post, "/api/registration/pay/20"),
                (HttpMethod::Post, "/api/registration/checkin"),
                (HttpMethod::Post, "/api/registration/cancel/20"),
            ]
        );
        assert_eq!(requests[2].body, RequestBody::Json(json!({ "regId": 20 })));
    }

    #[tokio::test]
    async fn doctor_queue_paths() {
        let (client, transport) = client();
        client.doctor().history(7, "2").await.unwrap_or_default();
        client.doctor().call_next("2").await.unwrap();
        client.doctor().call("2", 31).await.unwrap();
        client.doctor().complete(31).await.unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (HttpMethod::Get, "/api/doctor/history/7".into(), q(&[("doctorId", "2")])),
                (HttpMethod::Post, "/api/doctor/callNext/2".into(), vec![]),
                (HttpMethod::Post, "/api/doctor/call/2/31".into(), vec![]),
                (HttpMethod::Post, "/api/doctor/complete/31".into(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn emr_templates_omit_missing_department() {
        let (client, transport) = client();
        transport.ok(json!([]));
        transport.ok(json!([{ "tplId": 1, "name": "Cold", "type": "DEPT" }]));
        client.emr().templates(None).await.unwrap();
        let templates = client.emr().templates(Some(4)).await.unwrap();
        client.emr().delete_template(1).await.unwrap();

        assert_eq!(templates[0].kind.as_deref(), Some("DEPT"));
        assert_eq!(
            calls(&transport),
            vec![
                (HttpMethod::Get, "/api/emr/templates".into(), vec![]),
                (HttpMethod::Get, "/api/emr/templates".into(), q(&[("deptId", "4")])),
                (HttpMethod::Delete, "/api/emr/template/1".into(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn emr_by_registration_accepts_null() {
        let (client, transport) = client();
        transport.ok(json!(null));
        assert_eq!(client.emr().by_registration(8).await.unwrap(), None);
        assert_eq!(transport.last().url, "/api/emr/registration/8");
    }

    #[tokio::test]
    async fn triage_and_knowledge_search() {
        let (client, transport) = client();
        transport.ok(json!({ "deptId": 2, "deptName": "Neurology" }));
        let result = client
            .triage()
            .recommend(&TriageRequest { body_part: None, description: "headache".into() })
            .await
            .unwrap();
        assert_eq!(result.dept_name.as_deref(), Some("Neurology"));

        transport.ok(json!([]));
        client.triage().search_knowledge(&KnowledgeSearchRequest::new("migraine")).await.unwrap();
        let request = transport.last();
        assert_eq!(request.url, "/api/triage/search-knowledge");
        assert_eq!(request.body, RequestBody::Json(json!({ "query": "migraine", "limit": 5 })));
    }

    #[tokio::test]
    async fn lab_upload_is_multipart() {
        let (client, transport) = client();
        transport.ok(json!("/uploads/a.png"));
        let part = FilePart::file("a.png", "image/png", vec![1, 2, 3]);
        let url = client.lab().upload_image(part.clone()).await.unwrap();

        assert_eq!(url, "/uploads/a.png");
        let request = transport.last();
        assert_eq!(request.url, "/api/lab/upload");
        assert_eq!(request.body, RequestBody::Multipart(vec![part]));

        transport.ok(json!([]));
        client.lab().orders(Some(1)).await.unwrap();
        assert_eq!(transport.last().query_value("status"), Some("1"));
    }

    #[tokio::test]
    async fn check_item_search_uses_keyword() {
        let (client, transport) = client();
        transport.ok(json!([]));
        client.check_items().search("blood").await.unwrap();
        assert_eq!(
            calls(&transport),
            vec![(HttpMethod::Get, "/api/check-item/search".into(), q(&[("keyword", "blood")]))]
        );
    }

    #[tokio::test]
    async fn pharmacy_stock_update_has_no_body() {
        let (client, transport) = client();
        client.pharmacy().update_stock(12, -3).await.unwrap();
        client.pharmacy().pay_by_record(40).await.unwrap();
        client.pharmacy().dispense(41).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "/api/pharmacy/drug/stock");
        assert_eq!(requests[0].query, q(&[("drugId", "12"), ("quantity", "-3")]));
        assert_eq!(requests[0].body, RequestBody::Empty);
        assert_eq!(requests[1].url, "/api/pharmacy/prescriptions/pay/record/40");
        assert_eq!(requests[2].url, "/api/pharmacy/dispense/41");
    }

    #[tokio::test]
    async fn payment_paths() {
        let (client, transport) = client();
        transport.ok(json!({ "success": true, "totalAmount": 25.5 }));
        let paid = client.payment().registration(3).await.unwrap();
        assert!(paid.success);
        assert_eq!(paid.total_amount, Some(25.5));

        transport.ok(json!({ "success": true }));
        transport.ok(json!({ "success": true }));
        client.payment().prescriptions(4).await.unwrap();
        client.payment().lab_order(5).await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "/api/payment/registration/3",
                "/api/payment/prescription/record/4",
                "/api/payment/lab/5",
            ]
        );
    }

    #[tokio::test]
    async fn admin_user_management() {
        let (client, transport) = client();
        transport.ok(json!({ "records": [], "total": 0 }));
        let query = UserQuery { keyword: Some("li".into()), ..UserQuery::default() };
        client.admin().users(&query).await.unwrap();
        client.admin().set_user_status(6, 0).await.unwrap();
        client.admin().delete_user(6).await.unwrap();
        client.admin().delete_room(2).await.unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (HttpMethod::Get, "/api/admin/users".into(), q(&[("page", "1"), ("size", "10"), ("keyword", "li")])),
                (HttpMethod::Post, "/api/admin/user/6/status".into(), q(&[("status", "0")])),
                (HttpMethod::Delete, "/api/admin/user/6".into(), vec![]),
                (HttpMethod::Delete, "/api/admin/rooms/2".into(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn admin_schedule_generation() {
        let (client, transport) = client();
        client.admin().generate_week_schedules().await.unwrap();
        let range = GenerateSchedulesRequest { start_date: date(2024, 6, 3), end_date: date(2024, 6, 9) };
        client.admin().generate_schedules(&range).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "/api/admin/schedules/generate");
        assert_eq!(requests[0].body, RequestBody::Empty);
        assert_eq!(requests[1].url, "/api/admin/schedule/generate-week");
        assert_eq!(
            requests[1].body,
            RequestBody::Json(json!({ "startDate": "2024-06-03", "endDate": "2024-06-09" }))
        );
    }

    #[tokio::test]
    async fn admin_drug_import_and_export() {
        let (client, transport) = client();
        transport.ok(json!({ "imported": 3 }));
        client
            .admin()
            .import_drugs(FilePart::file("drugs.xlsx", SPREADSHEET_CONTENT_TYPE, vec![9]))
            .await
            .unwrap();
        transport.push(Ok(HttpResponse::new(200, vec![7, 7])));
        let bytes = client.admin().export_drugs().await.unwrap();

        let requests = transport.requests();
        assert!(matches!(requests[0].body, RequestBody::Multipart(ref p) if p.len() == 1 && p[0].field == "file"));
        assert_eq!(requests[1].url, "/api/admin/drugs/export");
        assert_eq!(requests[1].response_kind, ResponseKind::Binary);
        assert_eq!(bytes, vec![7, 7]);
    }

    #[tokio::test]
    async fn export_names_file_after_type_and_date() {
        let (client, transport) = client();
        transport.push(Ok(HttpResponse::new(200, vec![0x50, 0x4b])));
        let query = DataQuery::new("drugs");
        let file = client.admin().export_data_on(&query, date(2024, 6, 1)).await.unwrap();

        assert_eq!(file.file_name, "drugs_export_2024-06-01.xlsx");
        assert_eq!(file.content_type, SPREADSHEET_CONTENT_TYPE);
        assert_eq!(file.bytes, vec![0x50, 0x4b]);

        let request = transport.last();
        assert_eq!(request.url, "/api/admin/export");
        assert_eq!(request.query, q(&[("type", "drugs")]));
        assert_eq!(request.response_kind, ResponseKind::Binary);
    }

    #[tokio::test]
    async fn data_query_serializes_filters() {
        let (client, transport) = client();
        let query = DataQuery {
            dept_id: Some(3),
            exclude_chief: true,
            ..DataQuery::new("doctors").page(2, 20)
        };
        client.admin().query(&query).await.unwrap();
        assert_eq!(
            transport.last().query,
            q(&[("type", "doctors"), ("page", "2"), ("size", "20"), ("deptId", "3"), ("excludeChief", "true")])
        );
    }

    #[tokio::test]
    async fn knowledge_base_crud() {
        let (client, transport) = client();
        transport.ok(json!([]));
        client.knowledge_base().list().await.unwrap();
        let doc = MedicalDocument { disease_name: Some("Flu".into()), ..MedicalDocument::default() };
        client.knowledge_base().update("abc", &doc).await.unwrap();
        client.knowledge_base().remove("abc").await.unwrap();
        transport.ok(json!([]));
        let filter = KnowledgeFilter { keyword: None, department: Some("ENT".into()) };
        client.knowledge_base().search(&filter).await.unwrap();

        assert_eq!(
            calls(&transport),
            vec![
                (HttpMethod::Get, "/api/admin/kb/list".into(), vec![]),
                (HttpMethod::Put, "/api/admin/kb/abc".into(), vec![]),
                (HttpMethod::Delete, "/api/admin/kb/abc".into(), vec![]),
                (HttpMethod::Get, "/api/admin/kb/list".into(), q(&[("department", "ENT")])),
            ]
        );
    }

    #[tokio::test]
    async fn knowledge_base_batch_import_sends_every_file() {
        let (client, transport) = client();
        transport.ok(json!(2));
        let files = vec![
            FilePart::file("flu.json", "application/json", b"{}".to_vec()),
            FilePart::file("cold.txt", "text/plain", b"rest".to_vec()),
        ];
        let imported = client.knowledge_base().import(files).await.unwrap();

        assert_eq!(imported, 2);
        let request = transport.last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "/api/admin/kb/import");
        match request.body {
            RequestBody::Multipart(parts) => {
                let names: Vec<_> = parts.iter().map(|p| (p.field.as_str(), p.file_name.as_str())).collect();
                assert_eq!(names, vec![("files", "flu.json"), ("files", "cold.txt")]);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }
}
