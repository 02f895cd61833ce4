mod cafe;
mod reservation;
mod user;

pub use cafe::{Cafe, NewCafe};
pub use reservation::{DEFAULT_RESERVATION_STATUS, NewReservation, Reservation};
pub use user::{NewUser, User};
