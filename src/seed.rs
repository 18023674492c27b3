//! Seed data served by the mock.
//!
//! Everything here is built once at startup and only ever read afterwards.

use chrono::{NaiveDateTime, ParseError};

use playmate_model::{Player, Post, User};

/// The key the seeded user is stored under.
pub const SEEDED_USER_EMAIL: &str = "test@example.com";

/// Placeholder avatar handed out to every account.
pub const DEFAULT_AVATAR: &str = "https://via.placeholder.com/100";

/// Immutable lookup table of everything the mock knows about.
#[derive(Clone, Debug)]
pub struct Seed {
    user: User,
    post: Post,
    player: Player,
}

impl Seed {
    /// Builds the seed table.
    pub fn new() -> Result<Seed, ParseError> {
        let user = User {
            id: 1,
            username: "testuser".into(),
            email: SEEDED_USER_EMAIL.into(),
            nickname: "测试用户".into(),
            avatar: DEFAULT_AVATAR.into(),
            balance: 100.0,
            level: 1,
            experience: 0,
        };

        let post = Post {
            id: 1,
            title: "欢迎来到PlayMate".into(),
            content: "这是一个测试帖子".into(),
            author: "testuser".into(),
            create_time: "2024-01-01T00:00:00".parse::<NaiveDateTime>()?,
            likes: 10,
            comments: 5,
        };

        let player = Player {
            id: 1,
            nickname: "专业陪玩".into(),
            level: 10,
            price: 50.0,
            games: vec!["王者荣耀".into(), "LOL".into()],
            avatar: DEFAULT_AVATAR.into(),
            description: "经验丰富的陪玩玩家".into(),
        };

        Ok(Seed {
            user,
            post,
            player,
        })
    }

    /// All seeded users.
    pub fn users(&self) -> &[User] {
        std::slice::from_ref(&self.user)
    }

    /// Looks up a user by their key, which is their email.
    pub fn user(&self, key: &str) -> Option<&User> {
        self.users().iter().find(|user| user.email == key)
    }

    /// The seeded user.
    pub fn default_user(&self) -> &User {
        &self.user
    }

    /// How many users were seeded.
    pub fn user_count(&self) -> usize {
        self.users().len()
    }

    /// All posts, in feed order.
    pub fn posts(&self) -> &[Post] {
        std::slice::from_ref(&self.post)
    }

    /// Finds a post by id.
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts().iter().find(|post| post.id == id)
    }

    /// All players, in listing order.
    pub fn players(&self) -> &[Player] {
        std::slice::from_ref(&self.player)
    }

    /// Finds a player by id.
    pub fn player(&self, id: u64) -> Option<&Player> {
        self.players().iter().find(|player| player.id == id)
    }
}
