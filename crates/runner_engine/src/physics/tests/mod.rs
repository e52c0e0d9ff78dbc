//! Scenario tests running real entities through the collision system
