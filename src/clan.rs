//! Static clan tables: display labels and per-clan editing capabilities.

/// Known clan IDs and their display labels.
const CLAN_NAMES: &[(i64, &str)] = &[
    (1, "(Hyur) Midlander"),
    (2, "(Hyur) Highlander"),
    (3, "(Elezen) Wildwood"),
    (4, "(Elezen) Duskwight"),
    (5, "(Lalafell) Plainsfolk"),
    (6, "(Lalafell) Dunesfolk"),
    (7, "(Miqo'te) Seeker of the Sun"),
    (8, "(Miqo'te) Keeper of the Moon"),
    (9, "(Roegadyn) Sea Wolf"),
    (10, "(Roegadyn) Hellsguard"),
    (11, "(Au Ra) Raen"),
    (12, "(Au Ra) Xaela"),
    (13, "(Hrothgar) Helions"),
    (14, "(Hrothgar) The Lost"),
    (15, "(Viera) Rava"),
    (16, "(Viera) Veena"),
];

/// Clans whose designs have no tail field to edit. A deny-list rather than an
/// allow-list so a clan introduced later defaults to tail-editable.
const TAILLESS_CLANS: &[i64] = &[1, 2, 3, 4, 5, 6, 9, 10];

pub fn clan_label(clan_id: i64) -> String {
    CLAN_NAMES
        .iter()
        .find(|(id, _)| *id == clan_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown Clan ({clan_id})"))
}

pub fn tail_editable(clan_id: i64) -> bool {
    !TAILLESS_CLANS.contains(&clan_id)
}
