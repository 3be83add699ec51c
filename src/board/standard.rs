//! The classic ten-set board.
//!
//! Coordinates are in board-image pixels. Off-card role and take areas are
//! absolute; the presentation layer draws scene cards at the set's area.

use crate::core::config::{
    BoardConfig, Currency, LocationConfig, LocationKindConfig, RoleConfig, TakeConfig, Upgrade,
};
use crate::core::geometry::{Area, TokenLayout};

const SET_W: i32 = 205;
const SET_H: i32 = 115;
const ROLE_SIZE: i32 = 46;
const TAKE_SIZE: i32 = 47;

/// Casting office price list: (rank, dollars, credits).
pub const UPGRADE_PRICES: [(u8, u32, u32); 5] =
    [(2, 4, 5), (3, 10, 10), (4, 18, 15), (5, 28, 20), (6, 40, 25)];

fn part(name: &str, rank: u8, line: &str, x: i32, y: i32) -> RoleConfig {
    RoleConfig {
        line: line.to_string(),
        ..RoleConfig::new(name, rank).with_area(Area::new(x, y, ROLE_SIZE, ROLE_SIZE))
    }
}

/// A set whose takes sit at `take_spots`, numbered from 1 in order.
fn set(
    name: &str,
    x: i32,
    y: i32,
    take_spots: &[(i32, i32)],
    roles: Vec<RoleConfig>,
) -> LocationConfig {
    let mut loc = LocationConfig::set(name, 0, roles).with_area(Area::new(x, y, SET_W, SET_H));
    if let LocationKindConfig::Set { takes, .. } = &mut loc.kind {
        *takes = take_spots
            .iter()
            .zip(1u8..)
            .map(|(&(tx, ty), number)| TakeConfig {
                number,
                area: Area::new(tx, ty, TAKE_SIZE, TAKE_SIZE),
            })
            .collect();
    }
    loc
}

/// Tokens that overflow a row go back up to the set's top edge.
fn upper_rows() -> TokenLayout {
    TokenLayout {
        row_step: -120,
        ..TokenLayout::default()
    }
}

fn upgrades() -> Vec<Upgrade> {
    let mut upgrades = Vec::with_capacity(UPGRADE_PRICES.len() * 2);
    for (i, &(rank, dollars, credits)) in UPGRADE_PRICES.iter().enumerate() {
        let y = 470 + 19 * i as i32;
        upgrades.push(Upgrade {
            area: Area::new(98, y, 19, 19),
            ..Upgrade::new(rank, Currency::Dollars, dollars)
        });
        upgrades.push(Upgrade {
            area: Area::new(147, y, 19, 19),
            ..Upgrade::new(rank, Currency::Credits, credits)
        });
    }
    upgrades
}

/// The standard Deadwood board.
///
/// ```
/// let board = deadwood::board::standard_board();
/// assert_eq!(board.set_count(), 10);
/// ```
#[must_use]
pub fn standard_board() -> BoardConfig {
    BoardConfig::new("Deadwood")
        .with_location(
            LocationConfig::trailer("Trailer")
                .with_area(Area::new(991, 248, 194, 201))
                .with_neighbors(&["Main Street", "Saloon", "Hotel"]),
        )
        .with_location(
            LocationConfig::casting_office("Casting Office", upgrades())
                .with_area(Area::new(9, 459, 208, 209))
                .with_neighbors(&["Train Station", "Ranch", "Secret Hideout"]),
        )
        .with_location(
            set(
                "Train Station",
                21,
                69,
                &[(55, 11), (101, 11), (147, 11)],
                vec![
                    part("Crusty Prospector", 1, "Aww, peaches!", 114, 227),
                    part("Dragged by Train", 1, "Omgeezers!", 51, 268),
                    part("Preacher with Bag", 2, "The Lord will provide.", 114, 320),
                    part("Cyrus the Gunfighter", 4, "Git to fightin' or git away!", 49, 356),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Jail", "General Store", "Casting Office"]),
        )
        .with_location(
            set(
                "Secret Hideout",
                27,
                732,
                &[(244, 764), (299, 764), (354, 764)],
                vec![
                    part("Clumsy Pit Fighter", 1, "Hit me!", 435, 719),
                    part("Thug with Knife", 2, "Meet Suzy, my murderin' knife.", 521, 719),
                    part("Dangerous Tom", 3, "There's two ways we can do this...", 435, 808),
                    part("Penny, who is Lost", 4, "Oh, woe! For I am lost!", 521, 808),
                ],
            )
            .with_layout(TokenLayout {
                columns: None,
                ..TokenLayout::default()
            })
            .with_neighbors(&["Church", "Ranch", "Casting Office"]),
        )
        .with_location(
            set(
                "Church",
                623,
                734,
                &[(682, 675), (623, 675)],
                vec![
                    part("Dead Man", 1, "....", 857, 730),
                    part("Crying Woman", 2, "Oh, the humanity!", 858, 810),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Hotel", "Secret Hideout", "Bank"]),
        )
        .with_location(
            set(
                "Hotel",
                969,
                740,
                &[(1111, 683), (1058, 683), (1005, 683)],
                vec![
                    part("Sleeping Drunkard", 1, "Zzzzzzz... Whiskey!", 1111, 469),
                    part("Faro Player", 1, "Hit me!", 1044, 509),
                    part("Falls from Balcony", 2, "Arrrgghh!!", 1111, 557),
                    part("Australian Bartender", 3, "What'll it be, mate?", 1046, 596),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Trailer", "Church", "Bank"]),
        )
        .with_location(
            set(
                "Main Street",
                969,
                28,
                &[(804, 23), (858, 23), (912, 23)],
                vec![
                    part("Railroad Worker", 1, "I'm a steel-drivin' man!", 637, 22),
                    part("Falls off Roof", 2, "Aaaaiiiigggghh!", 720, 22),
                    part("Woman in Black Dress", 2, "Well, I'll be!", 637, 105),
                    part("Mayor McGinty", 4, "People of Deadwood!", 720, 105),
                ],
            )
            .with_neighbors(&["Trailer", "Saloon", "Jail"]),
        )
        .with_location(
            set(
                "Jail",
                281,
                27,
                &[(442, 156)],
                vec![
                    part("Prisoner in Cell", 2, "Zzzzzzz... Whiskey!", 519, 25),
                    part("Feller in Irons", 3, "Ah kilt the wrong man!", 519, 105),
                ],
            )
            .with_layout(TokenLayout {
                offset_x: 120,
                step_x: -45,
                row_step: 50,
                ..TokenLayout::default()
            })
            .with_neighbors(&["Main Street", "General Store", "Train Station"]),
        )
        .with_location(
            set(
                "General Store",
                370,
                282,
                &[(313, 330), (313, 277)],
                vec![
                    part("Man in Overalls", 1, "Looks like a storm's comin' in.", 236, 276),
                    part("Mister Keach", 3, "Howdy, stranger.", 236, 358),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Ranch", "Train Station", "Jail", "Saloon"]),
        )
        .with_location(
            set(
                "Ranch",
                252,
                478,
                &[(525, 473), (472, 473)],
                vec![
                    part("Shot in Leg", 1, "Ow! Me leg!", 412, 608),
                    part("Saucy Fred", 2, "That's what she said.", 488, 608),
                    part("Man Under Horse", 3, "A little help here!", 488, 525),
                ],
            )
            .with_layout(TokenLayout {
                columns: Some(3),
                ..TokenLayout::default()
            })
            .with_neighbors(&["Casting Office", "General Store", "Bank", "Secret Hideout"]),
        )
        .with_location(
            set(
                "Bank",
                623,
                475,
                &[(840, 549)],
                vec![
                    part("Suspicious Gentleman", 2, "Can you be more specific?", 911, 554),
                    part("Flustered Teller", 3, "Would you like a large bill, sir?", 911, 470),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Saloon", "Ranch", "Church", "Hotel"]),
        )
        .with_location(
            set(
                "Saloon",
                632,
                280,
                &[(679, 216), (626, 216)],
                vec![
                    part("Reluctant Farmer", 1, "I ain't so sure about this...", 877, 352),
                    part("Woman in Red Dress", 2, "Come up and see me!", 877, 276),
                ],
            )
            .with_layout(upper_rows())
            .with_neighbors(&["Trailer", "Main Street", "General Store", "Bank"]),
        )
}
