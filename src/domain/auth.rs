//! Caller identity, passed explicitly to every core operation.
//!
//! Identity issuance and validation live in an external identity provider;
//! this service receives an already-verified principal per request and trusts
//! it unconditionally. There is no ambient security context: operations that
//! need authorization take an [`AuthContext`] parameter.

use crate::error::AppError;
use serde_json::json;
use std::str::FromStr;

/// Role of the authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Provider,
    Customer,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "PROVIDER" => Ok(Role::Provider),
            "CUSTOMER" => Ok(Role::Customer),
            _ => Err(()),
        }
    }
}

/// The verified principal attached to the current request.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: i64,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fails with [`AppError::Forbidden`] unless the caller is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Administrator role required",
                json!({ "user_id": self.user_id }),
            ))
        }
    }

    /// Whether the caller may manage listings owned by `provider_id`.
    ///
    /// Owners manage their own listings; admins manage anyone's.
    pub fn can_manage(&self, provider_id: i64) -> bool {
        self.is_admin() || self.user_id == provider_id
    }
}
