pub mod skill_board;

pub use skill_board::{SkillBoard, SkillBoardView, SkillCard, SkillTab};
