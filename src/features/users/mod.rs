// users have no routes, the table is only reachable through `UserRepository`
pub mod model;
