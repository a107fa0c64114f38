mod keyboard;
mod session;
