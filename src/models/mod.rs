pub mod role;
pub mod session;
pub mod envelope;
pub mod auth;
pub mod schedule;
pub mod registration;
pub mod clinical;
pub mod triage;
pub mod queue;
pub mod lab;
pub mod pharmacy;
pub mod payment;
pub mod admin;
pub mod knowledge;

pub use role::Role;
pub use session::{LoginResponse, Profile, ProfileId};
pub use envelope::Envelope;
pub use auth::{LoginRequest, PatientInfo, PatientRegisterRequest, StaffUser};
pub use schedule::{Department, Schedule, ScheduleSlot};
pub use registration::{CheckInRequest, Registration, RegistrationDetail, RegistrationRequest};
pub use clinical::{
    EmrRequest, EmrTemplate, LabOrderItem, MedicalRecord, Prescription, PrescriptionDetail,
    PrescriptionItem, VisitDetail,
};
pub use triage::{KnowledgeSearchRequest, TriageRequest, TriageResult};
pub use queue::{CurrentPatient, QueueInfo, WaitingPatient};
pub use lab::{CheckItem, LabOrder, LabOrderView, LabResultRequest};
pub use pharmacy::{Drug, DrugImportRow};
pub use payment::{PaymentRequest, PaymentResponse};
pub use admin::{
    ConsultingRoom, DataQuery, ExportedFile, GenerateSchedulesRequest, ScheduleTemplate, UserQuery,
};
pub use knowledge::{KnowledgeFilter, MedicalDocument};
