//! Calculation logic for the CLT Payroll Tax Engine.
//!
//! This module contains all the calculation functions for payroll figures:
//! the generic marginal-bracket sum, the progressive social-security
//! contribution (INSS), the progressive income-tax withholding (IRRF),
//! the flat employer levy (FGTS), the forward gross-to-net composition,
//! and the iterative net-to-gross resolution.

mod bracket;
mod common;
mod employer_levy;
mod forward;
mod gross_from_net;
mod income_tax;
mod social_security;

pub use bracket::marginal_sum;
pub use common::round_half_up;
pub use employer_levy::calculate_employer_levy;
pub use forward::calculate_from_gross;
pub use gross_from_net::{
    CONVERGENCE_TOLERANCE, DAMPING_FACTOR, MAX_ITERATIONS, resolve_gross_from_net,
};
pub use income_tax::calculate_income_tax;
pub use social_security::calculate_social_security;
