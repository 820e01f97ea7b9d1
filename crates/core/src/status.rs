//! Status and priority enums for targets, campaigns, and outreach emails.
//!
//! Each enum maps one-to-one onto the string values stored in the database
//! (and enforced there by CHECK constraints). Platform status is free-form
//! text imported from spreadsheets and is intentionally not enumerated.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid target status strings (stored in DB).
pub const VALID_TARGET_STATUSES: &[&str] = &[
    "identified",
    "contacted",
    "negotiating",
    "approved",
    "live",
    "rejected",
];

/// Valid target priority strings.
pub const VALID_TARGET_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// Valid campaign status strings.
pub const VALID_CAMPAIGN_STATUSES: &[&str] = &["draft", "active", "paused", "completed"];

/// Valid outreach email status strings.
pub const VALID_EMAIL_STATUSES: &[&str] = &["draft", "sent", "delivered", "replied", "bounced"];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Identified,
    Contacted,
    Negotiating,
    Approved,
    Live,
    Rejected,
}

impl TargetStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "identified" => Ok(Self::Identified),
            "contacted" => Ok(Self::Contacted),
            "negotiating" => Ok(Self::Negotiating),
            "approved" => Ok(Self::Approved),
            "live" => Ok(Self::Live),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid target status '{s}'. Must be one of: {}",
                VALID_TARGET_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identified => "identified",
            Self::Contacted => "contacted",
            Self::Negotiating => "negotiating",
            Self::Approved => "approved",
            Self::Live => "live",
            Self::Rejected => "rejected",
        }
    }
}

/// Priority of a link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPriority {
    Low,
    Medium,
    High,
}

impl TargetPriority {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!(
                "Invalid target priority '{s}'. Must be one of: {}",
                VALID_TARGET_PRIORITIES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid campaign status '{s}'. Must be one of: {}",
                VALID_CAMPAIGN_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

/// Delivery status of an outreach email.
///
/// Once an email reaches `Sent` the record is frozen against editing; later
/// statuses (`Delivered`, `Replied`, `Bounced`) are set by status updates,
/// not by the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Draft,
    Sent,
    Delivered,
    Replied,
    Bounced,
}

impl EmailStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            "replied" => Ok(Self::Replied),
            "bounced" => Ok(Self::Bounced),
            _ => Err(format!(
                "Invalid email status '{s}'. Must be one of: {}",
                VALID_EMAIL_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Replied => "replied",
            Self::Bounced => "bounced",
        }
    }
}

/// Whether an email in the given status may still be edited.
pub fn email_is_editable(status: &str) -> bool {
    status == "draft"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
