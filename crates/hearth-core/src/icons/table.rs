//! Compiled-in Material Design Icons table.
//!
//! Codepoints from https://pictogrammers.com/library/mdi/.
//! Entries MUST stay sorted by name (byte-wise); `super::is_sorted` is
//! asserted at compile time.

use super::IconEntry;

pub(super) const ENTRIES: &[IconEntry] = &[
    IconEntry::new("air-conditioner", 0xF0003),
    IconEntry::new("air-filter", 0xF0D43),
    IconEntry::new("air-humidifier", 0xF1099),
    IconEntry::new("air-humidifier-off", 0xF1466),
    IconEntry::new("air-purifier", 0xF0D44),
    IconEntry::new("alarm", 0xF0020),
    IconEntry::new("alarm-bell", 0xF078E),
    IconEntry::new("alarm-check", 0xF0021),
    IconEntry::new("alarm-light", 0xF078F),
    IconEntry::new("alarm-light-off", 0xF171E),
    IconEntry::new("alarm-light-outline", 0xF0BEC),
    IconEntry::new("alarm-off", 0xF0022),
    IconEntry::new("alert", 0xF0026),
    IconEntry::new("alert-circle", 0xF0027),
    IconEntry::new("alert-circle-outline", 0xF05D6),
    IconEntry::new("arrow-down", 0xF0045),
    IconEntry::new("arrow-left", 0xF004D),
    IconEntry::new("arrow-right", 0xF0054),
    IconEntry::new("arrow-up", 0xF005D),
    IconEntry::new("battery", 0xF0079),
    IconEntry::new("battery-alert", 0xF007A),
    IconEntry::new("battery-charging", 0xF0084),
    IconEntry::new("bed", 0xF02E3),
    IconEntry::new("bell", 0xF009A),
    IconEntry::new("bell-off", 0xF009B),
    IconEntry::new("bell-outline", 0xF0A99),
    IconEntry::new("bell-ring", 0xF009C),
    IconEntry::new("blinds", 0xF00AC),
    IconEntry::new("blinds-open", 0xF1011),
    IconEntry::new("bluetooth", 0xF00AF),
    IconEntry::new("bluetooth-off", 0xF00B2),
    IconEntry::new("brightness-6", 0xF00A2),
    IconEntry::new("brightness-7", 0xF00A3),
    IconEntry::new("camera", 0xF0100),
    IconEntry::new("car", 0xF00B9),
    IconEntry::new("car-electric", 0xF0B4C),
    IconEntry::new("cast", 0xF00EC),
    IconEntry::new("cast-connected", 0xF00ED),
    IconEntry::new("cctv", 0xF07AE),
    IconEntry::new("ceiling-light", 0xF0769),
    IconEntry::new("ceiling-light-outline", 0xF17C7),
    IconEntry::new("check", 0xF012C),
    IconEntry::new("check-circle", 0xF05E0),
    IconEntry::new("chevron-down", 0xF0140),
    IconEntry::new("chevron-left", 0xF0141),
    IconEntry::new("chevron-right", 0xF0142),
    IconEntry::new("chevron-up", 0xF0143),
    IconEntry::new("clock", 0xF0954),
    IconEntry::new("clock-outline", 0xF0150),
    IconEntry::new("close", 0xF0156),
    IconEntry::new("close-circle", 0xF0159),
    IconEntry::new("cloud", 0xF015F),
    IconEntry::new("cog", 0xF0493),
    IconEntry::new("cogs", 0xF08D6),
    IconEntry::new("counter", 0xF0199),
    IconEntry::new("curtains", 0xF1846),
    IconEntry::new("curtains-closed", 0xF1847),
    IconEntry::new("desk-lamp", 0xF095F),
    IconEntry::new("dishwasher", 0xF0AAC),
    IconEntry::new("door", 0xF081A),
    IconEntry::new("door-closed", 0xF081C),
    IconEntry::new("door-open", 0xF081B),
    IconEntry::new("eye", 0xF0208),
    IconEntry::new("eye-off", 0xF0209),
    IconEntry::new("fan", 0xF0210),
    IconEntry::new("fan-off", 0xF081D),
    IconEntry::new("fire", 0xF0238),
    IconEntry::new("flash", 0xF0241),
    IconEntry::new("flash-off", 0xF0242),
    IconEntry::new("floor-lamp", 0xF08DD),
    IconEntry::new("fridge", 0xF0290),
    IconEntry::new("garage", 0xF06D9),
    IconEntry::new("garage-open", 0xF06DA),
    IconEntry::new("gate", 0xF0299),
    IconEntry::new("gate-open", 0xF1170),
    IconEntry::new("gauge", 0xF029A),
    IconEntry::new("heart", 0xF02D1),
    IconEntry::new("help-circle", 0xF02D7),
    IconEntry::new("home", 0xF02DC),
    IconEntry::new("home-assistant", 0xF07D0),
    IconEntry::new("home-outline", 0xF06A1),
    IconEntry::new("information", 0xF02FC),
    IconEntry::new("lamp", 0xF06B5),
    IconEntry::new("lamp-outline", 0xF17D0),
    IconEntry::new("laptop", 0xF0322),
    IconEntry::new("led-strip", 0xF07D6),
    IconEntry::new("led-strip-variant", 0xF1051),
    IconEntry::new("light-switch", 0xF097E),
    IconEntry::new("lightbulb", 0xF1802),
    IconEntry::new("lightbulb-group", 0xF1253),
    IconEntry::new("lightbulb-off", 0xF0E4F),
    IconEntry::new("lightbulb-on", 0xF06E8),
    IconEntry::new("lightbulb-outline", 0xF0336),
    IconEntry::new("lightning-bolt", 0xF140B),
    IconEntry::new("lock", 0xF033E),
    IconEntry::new("lock-open", 0xF033F),
    IconEntry::new("menu", 0xF035C),
    IconEntry::new("microphone", 0xF036C),
    IconEntry::new("microphone-off", 0xF036D),
    IconEntry::new("minus", 0xF0374),
    IconEntry::new("molecule-co2", 0xF07E4),
    IconEntry::new("monitor", 0xF0379),
    IconEntry::new("motion-sensor", 0xF0D91),
    IconEntry::new("music", 0xF075A),
    IconEntry::new("pause", 0xF03E4),
    IconEntry::new("phone", 0xF03F2),
    IconEntry::new("play", 0xF040A),
    IconEntry::new("plus", 0xF0415),
    IconEntry::new("power", 0xF0425),
    IconEntry::new("power-plug", 0xF06A5),
    IconEntry::new("power-plug-off", 0xF06A6),
    IconEntry::new("power-socket", 0xF1107),
    IconEntry::new("radiator", 0xF0438),
    IconEntry::new("radiator-off", 0xF0AD8),
    IconEntry::new("refresh", 0xF0450),
    IconEntry::new("reload", 0xF0453),
    IconEntry::new("robot-vacuum", 0xF070D),
    IconEntry::new("router-wireless", 0xF0469),
    IconEntry::new("server", 0xF048B),
    IconEntry::new("shield", 0xF0498),
    IconEntry::new("shield-home", 0xF068A),
    IconEntry::new("shower", 0xF09A0),
    IconEntry::new("skip-next", 0xF04AD),
    IconEntry::new("skip-previous", 0xF04AE),
    IconEntry::new("smoke-detector", 0xF0392),
    IconEntry::new("snowflake", 0xF0717),
    IconEntry::new("sofa", 0xF04C4),
    IconEntry::new("speaker", 0xF04C3),
    IconEntry::new("speaker-off", 0xF04C4),
    IconEntry::new("spotlight", 0xF0601),
    IconEntry::new("star", 0xF04CE),
    IconEntry::new("stop", 0xF04DB),
    IconEntry::new("string-lights", 0xF12BA),
    IconEntry::new("television", 0xF0502),
    IconEntry::new("television-off", 0xF0831),
    IconEntry::new("thermometer", 0xF050F),
    IconEntry::new("thermostat", 0xF0393),
    IconEntry::new("timer", 0xF051A),
    IconEntry::new("toggle-switch", 0xF0521),
    IconEntry::new("toggle-switch-off", 0xF0522),
    IconEntry::new("toilet", 0xF09AB),
    IconEntry::new("tools", 0xF1064),
    IconEntry::new("track-light", 0xF0914),
    IconEntry::new("tree", 0xF0531),
    IconEntry::new("umbrella", 0xF0576),
    IconEntry::new("vacuum", 0xF19F0),
    IconEntry::new("video", 0xF0567),
    IconEntry::new("video-off", 0xF0568),
    IconEntry::new("volume-high", 0xF057E),
    IconEntry::new("volume-low", 0xF057F),
    IconEntry::new("volume-medium", 0xF0580),
    IconEntry::new("volume-mute", 0xF0581),
    IconEntry::new("volume-off", 0xF0581),
    IconEntry::new("wall-sconce", 0xF091C),
    IconEntry::new("washing-machine", 0xF072A),
    IconEntry::new("water", 0xF058C),
    IconEntry::new("water-alert", 0xF1502),
    IconEntry::new("water-boiler", 0xF0F92),
    IconEntry::new("water-heater", 0xF1A46),
    IconEntry::new("water-percent", 0xF0592),
    IconEntry::new("water-pump", 0xF058E),
    IconEntry::new("weather-cloudy", 0xF0590),
    IconEntry::new("weather-fog", 0xF0591),
    IconEntry::new("weather-lightning", 0xF0593),
    IconEntry::new("weather-night", 0xF0594),
    IconEntry::new("weather-partly-cloudy", 0xF0595),
    IconEntry::new("weather-rainy", 0xF0597),
    IconEntry::new("weather-snowy", 0xF0598),
    IconEntry::new("weather-sunny", 0xF0599),
    IconEntry::new("weather-windy", 0xF059D),
    IconEntry::new("wifi", 0xF05A9),
    IconEntry::new("wifi-off", 0xF05AA),
    IconEntry::new("window-closed", 0xF05AC),
    IconEntry::new("window-open", 0xF05AD),
    IconEntry::new("window-shutter", 0xF111C),
    IconEntry::new("window-shutter-open", 0xF111E),
    IconEntry::new("wrench", 0xF0AD3),
];
