// Central place for design-document keys and path constants.
// Keep these out of the logic modules to reduce duplication and make tweaks safer.

// Well-known location of design documents under the user's application-data area.
pub const DIR_LAUNCHER: &str = "XIVLauncher";
pub const DIR_PLUGIN_CONFIGS: &str = "pluginConfigs";
pub const DIR_PLUGIN: &str = "Glamourer";
pub const DIR_DESIGNS: &str = "designs";

// Top-level design document fields (GD_ prefix).
pub const GD_NAME: &str = "Name";
pub const GD_CUSTOMIZE: &str = "Customize";

// Customization section fields.
pub const GD_CLAN: &str = "Clan";
pub const GD_FACE: &str = "Face";
pub const GD_HAIRSTYLE: &str = "Hairstyle";
pub const GD_TAIL_SHAPE: &str = "TailShape";
pub const GD_TAIL: &str = "Tail";
pub const GD_FACE_PAINT: &str = "FacePaint";

// Members of the wrapped-field object shape.
pub const GD_VALUE: &str = "Value";
pub const GD_APPLY: &str = "Apply";
