//! Clinic navigation routes and their role requirements.
//!
//! The route table is configuration: adding a role or a destination means
//! editing this list, nothing else.

use chairside_domain::{DomainResult, Role, RouteSpec};

/// Builds the portal's guarded route table.
///
/// # Errors
///
/// Returns an error if any path literal is malformed.
pub fn clinic_routes() -> DomainResult<Vec<RouteSpec>> {
    use Role::{Admin, Dentist, Receptionist};

    Ok(vec![
        RouteSpec::new("/dashboard", [Admin, Dentist, Receptionist])?,
        RouteSpec::new("/users", [Admin])?,
        RouteSpec::new("/settings", [Admin])?,
        RouteSpec::new("/patients", [Admin, Dentist, Receptionist])?,
        RouteSpec::new("/patients/:id", [Admin, Dentist])?,
        RouteSpec::new("/patients/register", [Receptionist])?,
        RouteSpec::new("/appointments", [Admin, Dentist, Receptionist])?,
        RouteSpec::new("/appointments/new", [Admin, Dentist, Receptionist])?,
        RouteSpec::new("/appointments/waitlist", [Receptionist])?,
        RouteSpec::new("/billing", [Admin, Receptionist])?,
        RouteSpec::new("/billing/payments", [Admin, Receptionist])?,
        RouteSpec::new("/reports", [Admin, Dentist, Receptionist])?,
        RouteSpec::new("/reports/scheduling", [Receptionist])?,
        RouteSpec::new("/inventory", [Admin])?,
        RouteSpec::new("/clinical/charting", [Dentist])?,
        RouteSpec::new("/treatments", [Dentist])?,
        RouteSpec::new("/imaging", [Dentist])?,
        RouteSpec::new("/communication", [Admin, Dentist, Receptionist])?,
    ])
}
