//! Create/edit form models for products and users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form inputs are held as raw strings while the user types. On submit a
//! draft is validated against the same rules the backend enforces and turned
//! into a record; [`save_record`] then creates or updates it depending on
//! whether the record already has an id.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::ApiError;
use crate::net::api::{CrudService, Resource};
use crate::net::transport::HttpTransport;
use crate::net::types::{Product, User};

pub const PRODUCT_CODE_LEN: (usize, usize) = (3, 20);
pub const PRODUCT_NAME_LEN: (usize, usize) = (3, 100);
pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Roles offered on the user form.
pub const AVAILABLE_ROLES: [&str; 3] = ["ROLE_USER", "ROLE_ADMIN", "ROLE_MODERATOR"];
pub const DEFAULT_ROLE: &str = "ROLE_USER";

// =============================================================================
// SAVE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveAction {
    Created,
    Updated,
}

impl SaveAction {
    /// Records without an id are new.
    #[must_use]
    pub fn for_id(id: Option<i64>) -> Self {
        if id.is_some() { Self::Updated } else { Self::Created }
    }

    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Created => "create",
            Self::Updated => "update",
        }
    }

    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Create `record`, or update it in place when `id` is set.
///
/// # Errors
///
/// Returns the service's [`ApiError`].
pub async fn save_record<T, R>(service: &CrudService<T, R>, id: Option<i64>, record: R) -> Result<SaveAction, ApiError>
where
    T: HttpTransport,
    R: Resource,
{
    match id {
        Some(id) => service.update(id, record).await.map(|_| SaveAction::Updated),
        None => service.create(&record).await.map(|_| SaveAction::Created),
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_code: String,
    pub product_name: String,
    pub product_value: String,
    pub stock: String,
    pub city_id: String,
}

impl ProductDraft {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone(),
            product_name: product.product_name.clone(),
            product_value: product.product_value.to_string(),
            stock: product.stock.to_string(),
            city_id: product.city_id.to_string(),
        }
    }

    /// Validate the inputs and build the record to send. Fields not on the
    /// form (id, owner) are carried over from `base` when editing.
    ///
    /// # Errors
    ///
    /// Returns the message for the first invalid field.
    pub fn validate(&self, base: Option<&Product>) -> Result<Product, &'static str> {
        let product_code = self.product_code.trim();
        if product_code.is_empty() {
            return Err("Product code is required");
        }
        if !within(product_code, PRODUCT_CODE_LEN) {
            return Err("Product code must be between 3 and 20 characters");
        }

        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err("Product name is required");
        }
        if !within(product_name, PRODUCT_NAME_LEN) {
            return Err("Product name must be between 3 and 100 characters");
        }

        let product_value = required(&self.product_value, "Product value is required")?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or("Product value must be a number")?;
        if product_value < 0.0 {
            return Err("Product value must be greater than or equal to zero");
        }

        let stock = required(&self.stock, "Stock is required")?
            .parse::<i32>()
            .map_err(|_| "Stock must be a whole number")?;
        if stock < 0 {
            return Err("Stock must be greater than or equal to zero");
        }

        let city_id = required(&self.city_id, "City ID is required")?
            .parse::<i64>()
            .map_err(|_| "City ID must be a number")?;

        Ok(Product {
            id: base.and_then(|p| p.id),
            product_code: product_code.to_owned(),
            product_name: product_name.to_owned(),
            product_value,
            stock,
            city_id,
            user_id: base.and_then(|p| p.user_id),
        })
    }
}

// =============================================================================
// USER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    /// Left empty on edit to keep the stored password.
    pub password: String,
    pub roles: Vec<String>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            roles: vec![DEFAULT_ROLE.to_owned()],
        }
    }
}

impl UserDraft {
    /// The password is never prefilled.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            roles: user.roles.clone(),
        }
    }

    /// Add or remove `role`.
    pub fn toggle_role(&mut self, role: &str) {
        if let Some(pos) = self.roles.iter().position(|r| r == role) {
            self.roles.remove(pos);
        } else {
            self.roles.push(role.to_owned());
        }
    }

    /// Validate the inputs and build the record to send. A password is
    /// required when creating; when editing (`base` is set) an empty password
    /// is omitted so the stored one is kept.
    ///
    /// # Errors
    ///
    /// Returns the message for the first invalid field.
    pub fn validate(&self, base: Option<&User>) -> Result<User, &'static str> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Username is required");
        }
        if username.chars().count() < USERNAME_MIN_LEN {
            return Err("Username must be at least 3 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required");
        }
        if !is_valid_email(email) {
            return Err("Enter a valid email address");
        }

        let editing = base.is_some();
        let password = if self.password.is_empty() {
            if !editing {
                return Err("Password is required");
            }
            None
        } else if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err("Password must be at least 6 characters");
        } else {
            Some(self.password.clone())
        };

        Ok(User {
            id: base.and_then(|u| u.id),
            username: username.to_owned(),
            email: email.to_owned(),
            password,
            roles: self.roles.clone(),
        })
    }
}

/// `local@domain` with no whitespace and no empty or dotted-edge parts.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn within(value: &str, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&value.chars().count())
}

fn required<'a>(value: &'a str, message: &'static str) -> Result<&'a str, &'static str> {
    let value = value.trim();
    if value.is_empty() { Err(message) } else { Ok(value) }
}
