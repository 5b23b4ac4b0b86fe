//! Shared vCard fixtures, modeled on cards this system actually emits
//! and receives.

/// The compact card the QR encoder produces.
pub const VCARD_QR_EXPORT: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Man;Leo;;;\r\n\
FN:Leo Man\r\n\
ORG:IrisGo\r\n\
TITLE:Founder\r\n\
TEL;TYPE=CELL:+886912345678\r\n\
EMAIL:leo@irisgo.xyz\r\n\
URL:https://irisgo.xyz\r\n\
END:VCARD\r\n";

/// A bilingual card with phonetic name extensions.
pub const VCARD_BILINGUAL: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Chen;Amy;;;\r\n\
FN:Amy Chen\r\n\
X-PHONETIC-LAST-NAME:陳\r\n\
X-PHONETIC-FIRST-NAME:愛美\r\n\
ORG:山海科技股份有限公司\r\n\
TITLE:總經理\r\n\
TEL;TYPE=CELL:+886287654321\r\n\
EMAIL:amy.chen@shanhai.tw\r\n\
END:VCARD\r\n";

/// Multiple phones and emails; later ones carry TYPE labels.
pub const VCARD_MULTI_VALUE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Man;Leo;;;\r\n\
FN:Leo Man\r\n\
TEL;TYPE=CELL:+886912345678\r\n\
TEL;TYPE=WORK:+886223456789\r\n\
EMAIL:leo@irisgo.xyz\r\n\
EMAIL;TYPE=HOME:leo.man@example.com\r\n\
END:VCARD\r\n";

/// Vendor extensions, a social profile, and a folded note.
pub const VCARD_EXTENSIONS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Man;Leo;;;\r\n\
FN:Leo Man\r\n\
NOTE:Met at Computex\r\n booth 42\r\n\
X-SOCIALPROFILE;TYPE=TWITTER:@leoman\r\n\
X-LINE-ID:leo.man\r\n\
END:VCARD\r\n";

/// A 4.0 card as received from another producer.
pub const VCARD_V4_INBOUND: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
N:Tanaka;Hiroshi;;;\r\n\
FN:Hiroshi Tanaka\r\n\
ORG:田中商事株式会社\r\n\
TEL;TYPE=\"cell,voice\":+81312345678\r\n\
END:VCARD\r\n";

/// An inline photo declared base64 ("hello" for brevity).
pub const VCARD_INLINE_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Man;Leo;;;\r\n\
FN:Leo Man\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:aGVsbG8=\r\n\
END:VCARD\r\n";
