//! Route handlers organized by access level.
