/// Cookie carrying the externally issued session token
pub const SESSION_COOKIE_NAME: &str = "cst_session";

/// `Set-Cookie` value that expires the session cookie
pub const SESSION_COOKIE_CLEAR: &str = "cst_session=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

// =============================================================================
// ACTIVITY IDENTIFIERS
// =============================================================================

/// Échecs & Rubik's Cube
pub const ACTIVITY_CHESS: &str = "chess";

/// Prix du meilleur TIPE
pub const ACTIVITY_INNOVATION: &str = "innovation";

/// Robotique
pub const ACTIVITY_ROBOTICS: &str = "robotics";

/// Every activity a member can sign up for, in display order
pub const ACTIVITY_IDS: &[&str] = &[ACTIVITY_ROBOTICS, ACTIVITY_CHESS, ACTIVITY_INNOVATION];
