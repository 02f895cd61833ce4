mod mocks;
mod unit_reservation_request;
