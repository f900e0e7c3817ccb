use std::fmt;
use std::str::FromStr;

/// The four record kinds served by this process, one collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Drivers,
    Rides,
    Users,
    Payments,
}

impl Entity {
    pub const ALL: [Entity; 4] = [Entity::Drivers, Entity::Rides, Entity::Users, Entity::Payments];

    pub fn name(&self) -> &'static str {
        match self {
            Entity::Drivers => "drivers",
            Entity::Rides => "rides",
            Entity::Users => "users",
            Entity::Payments => "payments",
        }
    }

    /// Resource path the handler is mounted on.
    pub fn path(&self) -> &'static str {
        match self {
            Entity::Drivers => "/drivers",
            Entity::Rides => "/rides",
            Entity::Users => "/users",
            Entity::Payments => "/payments",
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            Entity::Drivers => super::driver::ID_PREFIX,
            Entity::Rides => super::ride::ID_PREFIX,
            Entity::Users => super::user::ID_PREFIX,
            Entity::Payments => super::payment::ID_PREFIX,
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            Entity::Drivers => "Driver not found",
            Entity::Rides => "Ride not found",
            Entity::Users => "User not found",
            Entity::Payments => "Payment not found",
        }
    }

    /// Only payments can be deleted.
    pub fn allows_delete(&self) -> bool {
        matches!(self, Entity::Payments)
    }

    /// Environment variable holding this entity's collection name.
    pub fn collection_env(&self) -> &'static str {
        match self {
            Entity::Drivers => "MONGO_DRIVERS_COLLECTION",
            Entity::Rides => "MONGO_RIDES_COLLECTION",
            Entity::Users => "MONGO_USERS_COLLECTION",
            Entity::Payments => "MONGO_PAYMENTS_COLLECTION",
        }
    }

    /// Variable read by single-handler deployments when `collection_env` is unset.
    pub fn fallback_collection_env(&self) -> Option<&'static str> {
        match self {
            Entity::Payments => None,
            _ => Some("MONGO_COLLECTION"),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Entity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drivers" => Ok(Entity::Drivers),
            "rides" => Ok(Entity::Rides),
            "users" => Ok(Entity::Users),
            "payments" => Ok(Entity::Payments),
            other => Err(format!("unknown handler '{}'", other)),
        }
    }
}
