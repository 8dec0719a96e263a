//! The portal's route table and the views behind it.
//!
//! Each role lands on its own dashboard; the admin pages are reachable only
//! by administrative staff. Views are registered as deferred descriptors so
//! a citizen session never builds the admin pages.

use std::sync::Arc;

use sevagate_core::Role;
use sevagate_views::{RegistryError, View, ViewDescriptor, ViewId, ViewRegistry};

/// Role tag for administrative staff.
pub const SECRETARY: &str = "Secretary-Login";
/// Role tag for citizens.
pub const CITIZEN: &str = "user-login";

/// Login entry point for unauthenticated callers.
pub const LOGIN_PATH: &str = "/login";
/// Citizen landing route.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Secretary landing route.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_REPORT_PATH: &str = "/admin/report";
pub const ADMIN_UPLOAD_DATA_PATH: &str = "/admin/upload-data";
pub const ADMIN_PROPOSAL_FORM_PATH: &str = "/admin/proposal-form";

/// Examination standards shown on the district report.
pub const STANDARDS: [&str; 5] = ["WASTANIA", "FAUQUANIA", "MOULVI", "ALIM", "FAZIL"];

/// Roles this shell recognizes. Anything else resolves to "no role".
pub fn allowed_roles() -> [Role; 2] {
    [Role::new(SECRETARY), Role::new(CITIZEN)]
}

/// The portal's full protected route table.
pub fn default_registry() -> Result<ViewRegistry, RegistryError> {
    let secretary = Role::new(SECRETARY);
    let citizen = Role::new(CITIZEN);

    ViewRegistry::builder()
        .route(
            DASHBOARD_PATH,
            [citizen.clone()],
            ViewDescriptor::new("citizen-dashboard", || {
                Ok(Arc::new(CitizenDashboard) as Arc<dyn View>)
            }),
        )
        .route(
            ADMIN_DASHBOARD_PATH,
            [secretary.clone()],
            ViewDescriptor::new("secretary-dashboard", || {
                Ok(Arc::new(SecretaryDashboard) as Arc<dyn View>)
            }),
        )
        .route(
            ADMIN_REPORT_PATH,
            [secretary.clone()],
            ViewDescriptor::new("district-report", || {
                Ok(Arc::new(DistrictReport) as Arc<dyn View>)
            }),
        )
        .route(
            ADMIN_UPLOAD_DATA_PATH,
            [secretary.clone()],
            ViewDescriptor::new("upload-data", || Ok(Arc::new(UploadData) as Arc<dyn View>)),
        )
        .route(
            ADMIN_PROPOSAL_FORM_PATH,
            [secretary.clone()],
            ViewDescriptor::new("proposal-form", || {
                Ok(Arc::new(ProposalForm) as Arc<dyn View>)
            }),
        )
        .landing(secretary, ADMIN_DASHBOARD_PATH)
        .landing(citizen, DASHBOARD_PATH)
        .build()
}

/// Landing page for administrative staff.
struct SecretaryDashboard;

impl View for SecretaryDashboard {
    fn id(&self) -> ViewId {
        ViewId::new("secretary-dashboard")
    }

    fn title(&self) -> &str {
        "Secretary Dashboard"
    }

    fn mount(&self) -> String {
        [
            "Secretary Dashboard",
            "  - District-wise report of applied candidates",
            "  - Upload data",
            "  - Proposal form",
        ]
        .join("\n")
    }
}

/// Landing page for citizens.
struct CitizenDashboard;

impl View for CitizenDashboard {
    fn id(&self) -> ViewId {
        ViewId::new("citizen-dashboard")
    }

    fn title(&self) -> &str {
        "User Dashboard"
    }

    fn mount(&self) -> String {
        [
            "User Dashboard",
            "  - Application status",
            "  - Registration details",
        ]
        .join("\n")
    }
}

/// District-wise report of applied candidates.
struct DistrictReport;

impl View for DistrictReport {
    fn id(&self) -> ViewId {
        ViewId::new("district-report")
    }

    fn title(&self) -> &str {
        "District Wise Report"
    }

    fn mount(&self) -> String {
        let mut lines = vec!["District Wise Admin Report Of Applied Candidates".to_string()];
        lines.push(format!("  standards: {}", STANDARDS.join(", ")));
        lines.join("\n")
    }
}

struct UploadData;

impl View for UploadData {
    fn id(&self) -> ViewId {
        ViewId::new("upload-data")
    }

    fn title(&self) -> &str {
        "Upload Data"
    }

    fn mount(&self) -> String {
        "Upload candidate data".to_string()
    }
}

struct ProposalForm;

impl View for ProposalForm {
    fn id(&self) -> ViewId {
        ViewId::new("proposal-form")
    }

    fn title(&self) -> &str {
        "Proposal Form"
    }

    fn mount(&self) -> String {
        "Madrasa proposal form".to_string()
    }
}
