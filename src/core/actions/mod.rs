pub mod colourise_field;
