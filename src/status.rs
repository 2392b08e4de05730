//! Travel-status document.
//!
//! Where the owner currently is and where they are headed next. Loaded
//! once at startup; the `/status` payload lifts the timezone out of the
//! nested location for callers that only want that.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::docs::{self, DocumentError};

const FILE_NAME: &str = "travel_plans.json";

/// Current location with its timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub timezone: String,
}

/// An upcoming trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub destination: String,
    pub dates: String,
    pub purpose: String,
}

/// The travel-plans document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlans {
    pub current_location: Location,
    pub current_activity: String,
    pub current_company: String,
    pub upcoming_trips: Vec<Trip>,
}

/// `/status` response shape.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub location: Location,
    pub current_activity: String,
    pub current_company: String,
    pub upcoming_trips: Vec<Trip>,
    pub timezone: String,
}

impl TravelPlans {
    /// Load the document from the data directory.
    pub fn load(dir: &Path) -> Result<Self, DocumentError> {
        docs::load_json(dir, FILE_NAME)
    }

    /// Shape the document into the `/status` payload.
    pub fn report(&self) -> StatusReport {
        StatusReport {
            timezone: self.current_location.timezone.clone(),
            location: self.current_location.clone(),
            current_activity: self.current_activity.clone(),
            current_company: self.current_company.clone(),
            upcoming_trips: self.upcoming_trips.clone(),
        }
    }
}
