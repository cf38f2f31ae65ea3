mod dashboard;
mod helpers;
mod seeding;
mod store;
