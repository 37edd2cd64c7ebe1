// Copy for the restaurant site. Everything here is immutable and rendered as-is.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// `id` of the section the link scrolls to.
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { target: "concept", label: "寿司忠の心" },
    NavLink { target: "menu", label: "おしながき" },
    NavLink { target: "specialties", label: "名物" },
    NavLink { target: "space", label: "お部屋" },
    NavLink { target: "access", label: "アクセス" },
];

pub const BRAND: &str = "寿司忠";
pub const FOUNDED: &str = "明治43年創業";
pub const FOUNDED_FORMAL: &str = "明治四十三年創業";
pub const TAGLINE: [&str; 2] = ["武蔵の小京都・小川町で", "百年以上の歴史を紡ぐ"];
pub const FOOTER_TAGLINE: &str = "明治43年創業 小川町の老舗料亭";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "伝統",
        subtitle: "老舗の誇り",
        description: "明治43年創業。100年以上の歴史の中で培われた「おもてなしの心」と、代々受け継がれてきた「味」を守り続けています。",
    },
    Pillar {
        title: "技術",
        subtitle: "なだ万の技",
        description: "四代目は老舗料亭「なだ万」で10年の修行を積み、確かな技術と感性で、新しい日本料理の世界を切り拓いています。",
    },
    Pillar {
        title: "地元",
        subtitle: "小川町の恵み",
        description: "「武蔵の小京都」と呼ばれる小川町の豊かな風土。地元の有機米や地酒など、地域の食材を活かした料理を提供します。",
    },
];

pub const PHILOSOPHY_QUOTE: [&str; 2] = ["寿司忠で創られるお料理の中にある", "物語の主役はあなたです。"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        title: "ランチ",
        subtitle: "LUNCH",
        description: "お得なランチセットや海鮮丼など。お昼のひとときを贅沢に。",
        price: "1,500円〜",
        image: "images/food_assorted.jpg",
    },
    MenuItem {
        title: "ディナー・コース",
        subtitle: "DINNER COURSE",
        description: "四代目おまかせコースや季節の会席料理をご用意。",
        price: "5,000円〜",
        image: "images/course_wakadanna.jpg",
    },
    MenuItem {
        title: "テイクアウト",
        subtitle: "TAKEOUT",
        description: "ご自宅でも料亭の味を。お祝いや法事のお弁当も承ります。",
        price: "1,000円〜",
        image: "images/unaju.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    pub label: &'static str,
    pub amount: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Specialty {
    pub title: &'static str,
    pub badge: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub paragraphs: [&'static str; 2],
    pub prices: [Price; 2],
    /// Image on the right on wide screens.
    pub image_trailing: bool,
}

pub const SPECIALTIES: [Specialty; 2] = [
    Specialty {
        title: "寿司忠のうなぎ",
        badge: "名物",
        image: "images/unaju.jpg",
        image_alt: "寿司忠のうなぎ",
        paragraphs: [
            "愛知県三河一色産を使用。注文を受けてから捌き、小川町の辛口地酒をふんだんに使って蒸し上げます。",
            "ふっくらとした身と脂のくどさがない、あっさりとした仕上がり。一度口にすればトロリととろけ、焦したタレの香ばしい香りが鼻を抜けてゆきます。",
        ],
        prices: [
            Price { label: "上鰻重", amount: "¥3,300", note: "税込" },
            Price { label: "特上鰻重", amount: "¥4,400", note: "税込" },
        ],
        image_trailing: false,
    },
    Specialty {
        title: "忠さんいなり・き久さん巻",
        badge: "伝統の味",
        image: "images/inari_maki_new.jpg",
        image_alt: "忠さんいなり・き久さん巻",
        paragraphs: [
            "創業以来の伝統を受け継ぐ、寿司忠の原点。「忠さん」は初代創業者 田中忠三郎の愛称、「き久」は忠三郎の妻に由来します。",
            "特製のタレで大切に、継ぎ足し継ぎ足し、守り続けてきた寿司忠の「味」。お持ち帰りや差し入れにも大変喜ばれております。",
        ],
        prices: [
            Price { label: "忠さんいなり", amount: "¥154", note: "税込/1個" },
            Price { label: "き久さん巻", amount: "¥660", note: "税込/1本" },
        ],
        image_trailing: true,
    },
];

pub const SPACE_PARAGRAPHS: [&str; 2] = [
    "「武蔵の小京都」の異名をもつ小川町は、古くから料亭や旅館などが多く、芸者の街としての文化や歴史を感じさせる建物が多く残っています。",
    "当料亭もその名残を残す、遊び心豊かなお部屋で食事を楽しんでいただけます。建具や内装の細部にまで宿る職人の技と、歴史を感じさせる落ち着いた空間で、至福のひとときをお過ごしください。",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scene {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SCENES: [Scene; 4] = [
    Scene { title: "ご宴会・接待", description: "最大100名様まで対応可能" },
    Scene { title: "お祝い・顔合わせ", description: "お食い初め、七五三、結納など" },
    Scene { title: "ご法要", description: "故人を偲ぶ大切なお席に" },
    Scene { title: "デート・記念日", description: "特別な日のお食事に" },
];

pub const OPENING_HOURS: &str = "営業時間: 11:00〜21:00";
pub const CLOSED_ON: &str = "定休日: 月曜日";

pub const DIRECTIONS: [&str; 3] = [
    "JR八高線・東武東上線「小川町」駅より徒歩3分",
    "関越自動車道 嵐山小川ICより10〜15分",
    "専用駐車場17台完備",
];

pub const HERO_IMAGE: &str = "images/hero_main.jpg";
pub const INTERIOR_IMAGE: &str = "images/concept_bg.jpg";

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_IDS: [&str; 5] = ["concept", "menu", "specialties", "space", "access"];

    #[test]
    fn nav_follows_page_order() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, SECTION_IDS);
    }

    #[test]
    fn specialties_alternate_sides() {
        assert!(!SPECIALTIES[0].image_trailing);
        assert!(SPECIALTIES[1].image_trailing);
    }

    #[test]
    fn images_are_relative_paths() {
        let images = MENU_ITEMS
            .iter()
            .map(|m| m.image)
            .chain(SPECIALTIES.iter().map(|s| s.image))
            .chain([HERO_IMAGE, INTERIOR_IMAGE]);
        for image in images {
            assert!(image.starts_with("images/"), "{image}");
        }
    }
}
