// Resume intake. Text uploads only; pasting remains the primary path.

pub mod upload;
