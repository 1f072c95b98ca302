pub mod icons;
pub mod modal;
pub mod scene;
pub mod scramble;
pub mod timers;
