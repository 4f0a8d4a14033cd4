mod keyboard;
mod submission;
