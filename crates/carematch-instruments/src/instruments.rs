pub mod mood_screen;
