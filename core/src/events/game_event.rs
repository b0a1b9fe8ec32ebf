use serde::{Deserialize, Serialize};

/// Client connection state, as reported by the game client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    LoginScreen,
    /// Map regions are being (re)built: login, region change, or end of a hop
    Loading,
    LoggedIn,
    /// Player started switching to another world
    Hopping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Mining,
    Smithing,
    Woodcutting,
    Fishing,
}

/// Chat channel of a message. Game feedback such as "You manage to mine
/// some iron." arrives as `Filtered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    Filtered,
    Game,
    Public,
    Private,
}

/// Physical kind of a scene object. Ore veins in cave walls are wall
/// objects; everything else is a ground object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    #[default]
    Ground,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Same tile column, ignoring plane.
    pub fn same_xy(&self, other: &WorldPoint) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// A scene object instance.
///
/// `handle` is the client's identity for this instance. When a rock
/// respawns the client creates a new instance, so the respawned object has
/// a different handle at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileObject {
    pub handle: u64,
    pub id: u32,
    pub position: WorldPoint,
    pub kind: ObjectKind,
}

impl TileObject {
    pub fn new(handle: u64, id: u32, position: WorldPoint, kind: ObjectKind) -> Self {
        Self {
            handle,
            id,
            position,
            kind,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }
}

/// Events delivered by the game client.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameStateChanged(GameState),
    /// Ground or wall object added to the scene
    ObjectSpawned(TileObject),
    /// Ground or wall object removed from the scene
    ObjectDespawned(TileObject),
    ExperienceChanged(Skill),
    ChatMessage { kind: ChatKind, message: String },
}
