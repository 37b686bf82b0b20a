//! Status Badge Colors
//!
//! Maps the free-text appointment status to a badge color. The mapping is
//! total: anything unrecognised is gray.

/// Badge color for an appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl StatusColor {
    /// Case-insensitive exact lookup
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "confirmed" => StatusColor::Green,
            "pending" => StatusColor::Yellow,
            "cancelled" => StatusColor::Red,
            _ => StatusColor::Gray,
        }
    }

    /// Background and text utility classes for the badge
    pub fn classes(self) -> &'static str {
        match self {
            StatusColor::Green => "bg-green-100 text-green-800",
            StatusColor::Yellow => "bg-yellow-100 text-yellow-800",
            StatusColor::Red => "bg-red-100 text-red-800",
            StatusColor::Gray => "bg-gray-100 text-gray-800",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Yellow => "yellow",
            StatusColor::Red => "red",
            StatusColor::Gray => "gray",
        }
    }
}

/// Badge classes for a raw status string
pub fn status_classes(status: &str) -> &'static str {
    StatusColor::for_status(status).classes()
}
