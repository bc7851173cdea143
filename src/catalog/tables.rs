//! Built-in package tables.
//!
//! Group order is the order packages are processed and printed in. The
//! dangerous list keeps two IMS entries with the flag unset: they sit on the
//! list for visibility but are safe to remove on most devices.

use super::PackageRecord;
use crate::types::Classification::*;

/// Named groups processed by every debloat run, in declaration order
pub const GROUPS: &[(&str, &[PackageRecord])] = &[
    ("LEVEL 1: ABSOLUTE TRASH", ABSOLUTE_TRASH),
    ("LEVEL 2: VENDOR BLOAT", VENDOR_BLOAT),
    ("LEVEL 3: USELESS FEATURES", USELESS_FEATURES),
    ("LEVEL 4: VENDOR SECURITY", VENDOR_SECURITY),
    ("LEVEL 5: GOOGLE BLOAT", GOOGLE_BLOAT),
    ("LEVEL 6: QUALCOMM BLOAT", PLATFORM_VENDOR_BLOAT),
    ("LEVEL 7: CARRIER BLOAT", CARRIER_BLOAT),
    ("LEVEL 8: SYSTEM UTILITIES", SYSTEM_UTILITIES),
    ("LEVEL 9: VENDOR SYSTEM", VENDOR_SYSTEM),
    ("LEVEL 10: STOCK APPS (Bloat)", STOCK_APPS),
    ("LEVEL 11: NECESSARY EVIL", NECESSARY_EVIL),
    ("LEVEL 12: OTHER CRUFT", OTHER_CRUFT),
];

pub const ABSOLUTE_TRASH: &[PackageRecord] = &[
    PackageRecord::new("com.miui.analytics", "Mi Analytics", Trash, "Tracking and analytics"),
    PackageRecord::new("com.xiaomi.mipicks", "Mi Picks", Trash, "App recommendations/ads"),
    PackageRecord::new("com.miui.daemon", "Mi Daemon", Trash, "Background telemetry"),
    PackageRecord::new("com.xiaomi.joyose", "Joyose", Trash, "Xiaomi service framework"),
    PackageRecord::new("com.miui.mishare.connectivity", "Mi Share", Trash, "Mi Share connectivity"),
    PackageRecord::new("com.mfashiongallery.emag", "Fashion Gallery", Trash, "Bloatware magazine"),
    PackageRecord::new("com.mi.globalTrendNews", "Trend News", Trash, "News feed bloat"),
    PackageRecord::new("com.xiaomi.glgm", "GLGM", Trash, "Xiaomi service"),
    PackageRecord::new("com.xiaomi.payment", "Mi Payment", Trash, "Payment service"),
    PackageRecord::new("com.mipay.wallet.id", "Mi Pay Wallet (ID)", Trash, "Indonesia wallet"),
    PackageRecord::new("com.mipay.wallet.in", "Mi Pay Wallet (IN)", Trash, "India wallet"),
    PackageRecord::new("com.miui.contentextension", "Content Extension", Trash, "Content suggestions"),
    PackageRecord::new("com.miui.hybrid", "Hybrid", Trash, "Hybrid engine"),
    PackageRecord::new("com.miui.hybrid.accessory", "Hybrid Accessory", Trash, "Hybrid accessory"),
    PackageRecord::new("com.xiaomi.gamecenter", "Game Center", Trash, "Game store bloat"),
    PackageRecord::new("com.xiaomi.gamecenter.sdk.service", "Game Center SDK", Trash, "Game SDK"),
    PackageRecord::new("com.mi.android.globalminusscreen", "App Vault", Trash, "Left screen cards"),
    PackageRecord::new("com.miui.yellowpage", "Yellow Page", Trash, "Yellow pages service"),
];

pub const VENDOR_BLOAT: &[PackageRecord] = &[
    PackageRecord::new("com.xiaomi.account", "Mi Account", VendorBloat, "Xiaomi account service"),
    PackageRecord::new("com.miui.cloudservice", "Mi Cloud Service", VendorBloat, "Cloud sync service"),
    PackageRecord::new("com.miui.cloudbackup", "Mi Cloud Backup", VendorBloat, "Cloud backup"),
    PackageRecord::new("com.miui.cloudservice.sysbase", "Cloud Sysbase", VendorBloat, "Cloud system base"),
    PackageRecord::new("com.miui.backup", "Mi Backup", VendorBloat, "Local backup app"),
    PackageRecord::new("com.xiaomi.jr.security", "JR Security", VendorBloat, "Financial security"),
    PackageRecord::new("com.xiaomi.discover", "Mi Discover", VendorBloat, "Content discovery"),
    PackageRecord::new("com.mi.android.globalpersonalassistant", "Personal Assistant", VendorBloat, "Assistant service"),
    PackageRecord::new("com.xiaomi.miplay_client", "Mi Play Client", VendorBloat, "Mi Play streaming"),
    PackageRecord::new("com.miui.player", "Mi Player", VendorBloat, "Video player"),
    PackageRecord::new("com.milink.service", "Mi Link", VendorBloat, "Device linking"),
    PackageRecord::new("com.xiaomi.upnp", "UPnP", VendorBloat, "UPnP service"),
    PackageRecord::new("com.xiaomi.midrop", "Mi Drop", VendorBloat, "File sharing"),
];

pub const USELESS_FEATURES: &[PackageRecord] = &[
    PackageRecord::new("com.mi.dlabs.vr", "VR Labs", UselessFeature, "VR features"),
    PackageRecord::new("com.miui.translation.kingsoft", "Kingsoft Translate", UselessFeature, "Translation service"),
    PackageRecord::new("com.miui.translation.youdao", "Youdao Translate", UselessFeature, "Translation service"),
    PackageRecord::new("com.miui.translation.xmcloud", "XMCloud Translate", UselessFeature, "Translation service"),
    PackageRecord::new("com.miui.translationservice", "Translation Service", UselessFeature, "Translation framework"),
    PackageRecord::new("com.miui.freeform", "Freeform", UselessFeature, "Freeform windows"),
    PackageRecord::new("com.miui.touchassistant", "Touch Assistant", UselessFeature, "Touch assistant ball"),
    PackageRecord::new("com.android.dreams.basic", "Basic Dreams", UselessFeature, "Screen saver"),
    PackageRecord::new("com.android.dreams.phototable", "Photo Table Dreams", UselessFeature, "Photo screen saver"),
    PackageRecord::new("com.android.egg", "Easter Egg", UselessFeature, "Android easter egg"),
    PackageRecord::new("com.android.wallpaper.livepicker", "Live Wallpaper Picker", UselessFeature, "Live wallpapers"),
    PackageRecord::new("com.android.wallpapercropper", "Wallpaper Cropper", UselessFeature, "Crop wallpapers"),
    PackageRecord::new("com.android.wallpaperbackup", "Wallpaper Backup", UselessFeature, "Wallpaper backup"),
    PackageRecord::new("com.miui.miwallpaper", "Mi Wallpaper", UselessFeature, "Mi wallpaper carousel"),
    PackageRecord::new("com.android.printspooler", "Print Spooler", UselessFeature, "Print service"),
    PackageRecord::new("com.android.bips", "Print Service", UselessFeature, "Built-in print"),
];

pub const VENDOR_SECURITY: &[PackageRecord] = &[
    PackageRecord::new("com.miui.securityadd", "Security Add", VendorSecurityAdware, "Security extras"),
    PackageRecord::new("com.qapp.secprotect", "SecProtect", VendorSecurityAdware, "Security protection"),
    PackageRecord::new("com.miui.guardprovider", "Guard Provider", VendorSecurityAdware, "Guard services"),
    PackageRecord::new("com.xiaomi.powerchecker", "Power Checker", VendorSecurityAdware, "Power monitoring"),
    PackageRecord::new("com.miui.sysopt", "System Optimizer", VendorSecurityAdware, "System optimizer"),
    PackageRecord::new("com.miui.cleaner", "Cleaner", VendorSecurityAdware, "Cleaner with ads"),
    PackageRecord::new("com.miui.cleanmaster", "Clean Master", VendorSecurityAdware, "Clean master"),
];

pub const GOOGLE_BLOAT: &[PackageRecord] = &[
    PackageRecord::new("com.android.chrome", "Chrome", GoogleBloat, "Google browser"),
    PackageRecord::new("com.google.android.apps.books", "Google Books", GoogleBloat, "Books app"),
    PackageRecord::new("com.google.android.apps.docs", "Google Docs", GoogleBloat, "Docs/Sheets/Slides"),
    PackageRecord::new("com.google.android.apps.magazines", "Google Magazines", GoogleBloat, "Newsstand"),
    PackageRecord::new("com.google.android.apps.maps", "Google Maps", GoogleBloat, "Maps app"),
    PackageRecord::new("com.google.android.apps.messaging", "Google Messages", GoogleBloat, "Messages app"),
    PackageRecord::new("com.google.android.apps.nbu.files", "Google Files", GoogleBloat, "Files app"),
    PackageRecord::new("com.google.android.apps.photos", "Google Photos", GoogleBloat, "Photos app"),
    PackageRecord::new("com.google.android.apps.tachyon", "Google Duo", GoogleBloat, "Video calls"),
    PackageRecord::new("com.google.android.apps.walletnfcrel", "Google Wallet", GoogleBloat, "Wallet/Pay"),
    PackageRecord::new("com.google.android.backuptransport", "Backup Transport", GoogleBloat, "Backup service"),
    PackageRecord::new("com.google.android.configupdater", "Config Updater", GoogleBloat, "Config updates"),
    PackageRecord::new("com.google.android.ext.services", "Ext Services", GoogleBloat, "Extended services"),
    PackageRecord::new("com.google.android.ext.shared", "Ext Shared", GoogleBloat, "Shared libs"),
    PackageRecord::new("com.google.android.feedback", "Feedback", GoogleBloat, "Feedback service"),
    PackageRecord::new("com.google.android.gm", "Gmail", GoogleBloat, "Gmail app"),
    PackageRecord::new("com.google.android.inputmethod.latin", "Gboard", GoogleBloat, "Google keyboard"),
    PackageRecord::new("com.google.android.inputmethod.pinyin", "Pinyin Input", GoogleBloat, "Chinese input"),
    PackageRecord::new("com.google.android.marvin.talkback", "TalkBack", GoogleBloat, "Accessibility"),
    PackageRecord::new("com.google.android.music", "Google Music", GoogleBloat, "Music app"),
    PackageRecord::new("com.google.android.onetimeinitializer", "One Time Init", GoogleBloat, "Setup initializer"),
    PackageRecord::new("com.google.android.partnersetup", "Partner Setup", GoogleBloat, "Partner setup"),
    PackageRecord::new("com.google.android.setupwizard", "Setup Wizard", GoogleBloat, "Setup wizard"),
    PackageRecord::new("com.google.android.syncadapters.calendar", "Calendar Sync", GoogleBloat, "Calendar sync"),
    PackageRecord::new("com.google.android.syncadapters.contacts", "Contacts Sync", GoogleBloat, "Contacts sync"),
    PackageRecord::new("com.google.android.talk", "Google Talk", GoogleBloat, "Hangouts service"),
    PackageRecord::new("com.google.android.tts", "Google TTS", GoogleBloat, "Text-to-speech"),
    PackageRecord::new("com.google.android.videos", "Google Videos", GoogleBloat, "Play Movies"),
    PackageRecord::new("com.google.android.youtube", "YouTube", GoogleBloat, "YouTube app"),
];

pub const PLATFORM_VENDOR_BLOAT: &[PackageRecord] = &[
    PackageRecord::new("com.qualcomm.qti.perfdump", "Perf Dump", PlatformVendorBloat, "Performance dump"),
    PackageRecord::new("com.qualcomm.qti.auth.sampleextauthservice", "Sample ExtAuth", PlatformVendorBloat, "Auth sample"),
    PackageRecord::new("com.qualcomm.qti.auth.sampleauthenticatorservice", "Sample Auth", PlatformVendorBloat, "Auth sample"),
    PackageRecord::new("com.qualcomm.qti.auth.fidocryptoservice", "FIDO Crypto", PlatformVendorBloat, "FIDO service"),
    PackageRecord::new("com.qualcomm.qti.auth.secureextauthservice", "Secure ExtAuth", PlatformVendorBloat, "Secure auth"),
    PackageRecord::new("com.qualcomm.qti.auth.securesampleauthservice", "Secure Sample", PlatformVendorBloat, "Secure sample"),
    PackageRecord::new("com.qti.service.colorservice", "Color Service", PlatformVendorBloat, "Display color"),
    PackageRecord::new("com.qualcomm.cabl", "CABL", PlatformVendorBloat, "Adaptive backlight"),
    PackageRecord::new("com.qualcomm.svi", "SVI", PlatformVendorBloat, "SVI service"),
    PackageRecord::new("com.qualcomm.embms", "eMBMS", PlatformVendorBloat, "Broadcast service"),
    PackageRecord::new("com.qti.qualcomm.datastatusnotification", "Data Status", PlatformVendorBloat, "Data notification"),
    PackageRecord::new("com.qti.qualcomm.deviceinfo", "Device Info", PlatformVendorBloat, "Device info"),
    PackageRecord::new("com.qualcomm.qti.qmmi", "QMMI", PlatformVendorBloat, "Diagnostics"),
    PackageRecord::new("com.qualcomm.timeservice", "Time Service", PlatformVendorBloat, "Time service"),
    PackageRecord::new("com.dsi.ant.server", "ANT Server", PlatformVendorBloat, "ANT+ wireless"),
    PackageRecord::new("com.qti.vzw.ims.internal.tests", "IMS Tests", PlatformVendorBloat, "IMS testing"),
    PackageRecord::new("com.fingerprints.serviceext", "Fingerprint Ext", PlatformVendorBloat, "FP extensions"),
    PackageRecord::new("com.fido.xiaomi.uafclient", "FIDO UAF", PlatformVendorBloat, "FIDO client"),
    PackageRecord::new("com.fido.asm", "FIDO ASM", PlatformVendorBloat, "FIDO service"),
];

pub const CARRIER_BLOAT: &[PackageRecord] = &[
    PackageRecord::new("com.android.cellbroadcastreceiver", "Cell Broadcast", CarrierBloat, "Emergency alerts"),
    PackageRecord::new("com.android.smspush", "SMS Push", CarrierBloat, "SMS push service"),
    PackageRecord::new("com.quicinc.cne.CNEService", "CNE Service", CarrierBloat, "Connectivity engine"),
    PackageRecord::new("com.qualcomm.qti.uceShimService", "UCE Shim", CarrierBloat, "UCE service"),
    PackageRecord::new("com.qualcomm.uimremoteclient", "UIM Remote Client", CarrierBloat, "UIM remote"),
    PackageRecord::new("com.qualcomm.uimremoteserver", "UIM Remote Server", CarrierBloat, "UIM server"),
    PackageRecord::new("com.qualcomm.qcrilmsgtunnel", "QCRIL MSG", CarrierBloat, "QCRIL tunnel"),
    PackageRecord::new("com.qualcomm.qti.radioconfiginterface", "Radio Config", CarrierBloat, "Radio config"),
    PackageRecord::new("com.qualcomm.qti.loadcarrier", "Load Carrier", CarrierBloat, "Carrier loader"),
    PackageRecord::new("com.qualcomm.qti.accesscache", "Access Cache", CarrierBloat, "Access cache"),
    PackageRecord::new("com.android.carrierdefaultapp", "Carrier Default", CarrierBloat, "Default carrier app"),
    PackageRecord::new("com.wapi.wapicertmanage", "WAPI Cert", CarrierBloat, "WAPI certs"),
    PackageRecord::new("org.codeaurora.btmultisim", "BT Multi-SIM", CarrierBloat, "Multi-SIM BT"),
    PackageRecord::new("com.qti.xdivert", "XDivert", CarrierBloat, "Call divert"),
    PackageRecord::new("com.qti.confuridialer", "ConfURI Dialer", CarrierBloat, "Conference dialer"),
    PackageRecord::new("com.qualcomm.qti.confdialer", "Conf Dialer", CarrierBloat, "Conference dialer"),
    PackageRecord::new("com.qualcomm.qti.callfeaturessetting", "Call Features", CarrierBloat, "Call settings"),
];

pub const SYSTEM_UTILITIES: &[PackageRecord] = &[
    PackageRecord::new("com.android.calendar", "Calendar", SystemUtility, "Stock calendar"),
    PackageRecord::new("com.android.deskclock", "Clock", SystemUtility, "Stock clock/alarm"),
    PackageRecord::new("com.android.email", "Email", SystemUtility, "Stock email"),
    PackageRecord::new("com.android.soundrecorder", "Sound Recorder", SystemUtility, "Audio recorder"),
    PackageRecord::new("com.miui.bugreport", "Bug Report", SystemUtility, "Bug reporting"),
    PackageRecord::new("com.miui.calculator", "Calculator", SystemUtility, "Calculator"),
    PackageRecord::new("com.miui.compass", "Compass", SystemUtility, "Compass app"),
    PackageRecord::new("com.miui.fm", "FM Radio", SystemUtility, "FM radio"),
    PackageRecord::new("com.miui.fmservice", "FM Service", SystemUtility, "FM service"),
    PackageRecord::new("com.miui.micloudsync", "Mi Cloud Sync", SystemUtility, "Cloud sync"),
    PackageRecord::new("com.miui.music", "Music", SystemUtility, "Music player"),
    PackageRecord::new("com.miui.notes", "Notes", SystemUtility, "Notes app"),
    PackageRecord::new("com.miui.providers.weather", "Weather Provider", SystemUtility, "Weather data"),
    PackageRecord::new("com.miui.screenrecorder", "Screen Recorder", SystemUtility, "Screen recorder"),
    PackageRecord::new("com.miui.video", "Video", SystemUtility, "Video app"),
    PackageRecord::new("com.miui.videoplayer", "Video Player", SystemUtility, "Video player"),
    PackageRecord::new("com.miui.voiceassistant", "Voice Assistant", SystemUtility, "Voice assistant"),
    PackageRecord::new("com.miui.weather2", "Weather", SystemUtility, "Weather app"),
    PackageRecord::new("com.xiaomi.scanner", "Scanner", SystemUtility, "QR/barcode scanner"),
    PackageRecord::new("com.miui.antispam", "Antispam", SystemUtility, "Spam filter"),
];

pub const VENDOR_SYSTEM: &[PackageRecord] = &[
    PackageRecord::new("com.android.thememanager", "Theme Manager", VendorSystem, "Theme manager"),
    PackageRecord::new("com.android.thememanager.module", "Theme Module", VendorSystem, "Theme module"),
    PackageRecord::new("com.miui.system", "MIUI System", VendorSystem, "MIUI system"),
    PackageRecord::new("com.miui.rom", "MIUI ROM", VendorSystem, "ROM info"),
    PackageRecord::new("com.mi.globallayout", "Global Layout", VendorSystem, "Layout service"),
];

pub const STOCK_APPS: &[PackageRecord] = &[
    PackageRecord::new("com.miui.gallery", "MIUI Gallery", AdRiddenStockApp, "Gallery with ADS! Replace with Fossify"),
    PackageRecord::new("com.android.fileexplorer", "File Explorer", AdRiddenStockApp, "File manager with ADS!"),
    PackageRecord::new("com.mi.android.globalFileexplorer", "Global File Explorer", AdRiddenStockApp, "File manager with ADS!"),
    PackageRecord::new("com.android.browser", "Stock Browser", AdRiddenStockApp, "Stock browser"),
];

pub const NECESSARY_EVIL: &[PackageRecord] = &[
    PackageRecord::new("com.android.camera", "Camera", NecessaryEvil, "Stock camera (optional removal)"),
    PackageRecord::new("com.miui.home", "Vendor Launcher", NecessaryEvil, "Vendor launcher (optional removal)"),
];

/// Google core services, only removed by the de-google mode
pub const GOOGLE_CORE: &[PackageRecord] = &[
    PackageRecord::new("com.android.vending", "Play Store", NecessaryEvil, "Google Play Store"),
    PackageRecord::new("com.google.android.gms", "Google Services", NecessaryEvil, "Google Play Services"),
    PackageRecord::new("com.google.android.gsf", "Google Framework", NecessaryEvil, "Services framework"),
    PackageRecord::new("com.google.android.webview", "WebView", NecessaryEvil, "Web rendering"),
    PackageRecord::new("com.google.android.packageinstaller", "Package Installer", NecessaryEvil, "App installer"),
];

pub const OTHER_CRUFT: &[PackageRecord] = &[
    PackageRecord::new("com.miui.android.fashiongallery", "Fashion Gallery", OtherCruft, "Fashion content"),
    PackageRecord::new("android.autoinstalls.config.Xiaomi.gemini", "Gemini AutoInstall", OtherCruft, "Auto-install config"),
    PackageRecord::new("com.android.NFCtestSvc", "NFC Test", OtherCruft, "NFC testing"),
    PackageRecord::new("com.android.apps.tag", "NFC Tag", OtherCruft, "NFC tags"),
    PackageRecord::new("com.android.bluetoothmidiservice", "BT MIDI", OtherCruft, "Bluetooth MIDI"),
    PackageRecord::new("com.android.bookmarkprovider", "Bookmark Provider", OtherCruft, "Bookmark storage"),
    PackageRecord::new("com.android.captiveportallogin", "Captive Portal", OtherCruft, "WiFi login"),
    PackageRecord::new("com.android.companiondevicemanager", "Companion Device", OtherCruft, "Device pairing"),
    PackageRecord::new("com.android.cts.ctsshim", "CTS Shim", OtherCruft, "Compatibility test"),
    PackageRecord::new("com.android.cts.priv.ctsshim", "CTS Priv Shim", OtherCruft, "CTS privileged"),
    PackageRecord::new("com.android.emergency", "Emergency Info", OtherCruft, "Emergency info"),
    PackageRecord::new("com.android.htmlviewer", "HTML Viewer", OtherCruft, "HTML viewer"),
    PackageRecord::new("com.android.managedprovisioning", "Managed Provision", OtherCruft, "Enterprise setup"),
    PackageRecord::new("com.android.provision", "Provision", OtherCruft, "Device provision"),
    PackageRecord::new("com.android.statementservice", "Statement Service", OtherCruft, "Statement service"),
    PackageRecord::new("com.android.updater", "System Updater", OtherCruft, "System updates"),
    PackageRecord::new("com.android.vpndialogs", "VPN Dialogs", OtherCruft, "VPN dialogs"),
    PackageRecord::new("com.facebook.appmanager", "Facebook Manager", OtherCruft, "Facebook bloat"),
    PackageRecord::new("com.facebook.services", "Facebook Services", OtherCruft, "Facebook services"),
    PackageRecord::new("com.facebook.system", "Facebook System", OtherCruft, "Facebook system"),
    PackageRecord::new("com.mi.webkit.core", "Mi WebKit", OtherCruft, "WebKit core"),
    PackageRecord::new("com.miui.cit", "CIT", OtherCruft, "Hardware testing"),
    PackageRecord::new("com.miui.global.packageinstaller", "Global Installer", OtherCruft, "Package installer"),
    PackageRecord::new("com.miui.smsextra", "SMS Extra", OtherCruft, "SMS extras"),
    PackageRecord::new("com.miui.wmsvc", "WM Service", OtherCruft, "Window manager"),
    PackageRecord::new("com.qti.dpmserviceapp", "DPM Service", OtherCruft, "Data Power Management"),
    PackageRecord::new("com.qualcomm.location", "Qualcomm Location", OtherCruft, "Location service"),
    PackageRecord::new("com.qualcomm.qti.poweroffalarm", "Power Off Alarm", OtherCruft, "Power-off alarm"),
    PackageRecord::new("com.qualcomm.qti.qtisystemservice", "QTI System Service", OtherCruft, "QTI service"),
    PackageRecord::new("com.qualcomm.wfd.service", "WFD Service", OtherCruft, "WiFi Display"),
    PackageRecord::new("com.xiaomi.bluetooth", "Mi Bluetooth", OtherCruft, "Mi Bluetooth"),
    PackageRecord::new("com.xiaomi.location.fused", "Mi Location", OtherCruft, "Location provider"),
    PackageRecord::new("com.xiaomi.providers.appindex", "App Index", OtherCruft, "App indexing"),
    PackageRecord::new("com.xiaomi.simactivate.service", "SIM Activate", OtherCruft, "SIM activation"),
    PackageRecord::new("org.codeaurora.gps.gpslogsave", "GPS Log", OtherCruft, "GPS logging"),
    PackageRecord::new("org.simalliance.openmobileapi.service", "OpenMobile API", OtherCruft, "Open mobile API"),
    PackageRecord::new("top.coolook", "Coolook", OtherCruft, "Unknown service"),
];

/// Packages known to bootloop or destabilise vendor firmware when removed
pub const DANGEROUS: &[PackageRecord] = &[
    PackageRecord::new("com.miui.securitycenter", "Security Center", Dangerous, "WILL CAUSE BOOTLOOP on Xiaomi!").flagged(),
    PackageRecord::new("com.miui.securitycore", "Security Core", Dangerous, "Part of Security Center").flagged(),
    PackageRecord::new("com.miui.powerkeeper", "Power Keeper", Dangerous, "May cause bootloop on Xiaomi").flagged(),
    PackageRecord::new("com.lbe.security.miui", "LBE Security", Dangerous, "Security framework on Xiaomi").flagged(),
    PackageRecord::new("com.xiaomi.finddevice", "Find Device", Dangerous, "Bootloop on MIUI 12.1+").flagged(),
    PackageRecord::new("com.xiaomi.micloud.sdk", "Mi Cloud SDK", Dangerous, "Gallery dependency on Xiaomi").flagged(),
    PackageRecord::new("com.miui.core", "MIUI Core", Dangerous, "System instability on Xiaomi").flagged(),
    PackageRecord::new("com.android.carrierconfig", "Carrier Config", Dangerous, "May break carrier features").flagged(),
    PackageRecord::new("com.qualcomm.qti.ims", "Qualcomm IMS", Dangerous, "VoLTE/VoWiFi (safe on most devices)"),
    PackageRecord::new("org.codeaurora.ims", "CodeAurora IMS", Dangerous, "VoLTE/VoWiFi (safe on most devices)"),
];
