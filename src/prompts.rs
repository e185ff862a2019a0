pub const JUDGE_SYSTEM: &str = include_str!("../data/prompts/judge_system.txt");
pub const JUDGE_USER: &str = include_str!("../data/prompts/judge_user.txt");
