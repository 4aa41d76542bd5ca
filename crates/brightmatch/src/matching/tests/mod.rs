mod common;
mod engine;
mod leaderboard;
mod roster;
