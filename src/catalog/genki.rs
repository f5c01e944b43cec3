//! Built-in lesson data, ordered after the Genki I kanji curriculum

use super::{KanjiEntry, Lesson};

/// The embedded lesson set
pub(super) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            1,
            "Numbers",
            vec![
                KanjiEntry::new('一', "one", "いち", "ichi")
                    .with_mnemonic("A single brushstroke resting on the ground: one."),
                KanjiEntry::new('二', "two", "に", "ni")
                    .with_mnemonic("Two strokes stacked like a pair of tatami mats."),
                KanjiEntry::new('三', "three", "さん", "san"),
                KanjiEntry::new('四', "four", "よん", "yon"),
                KanjiEntry::new('五', "five", "ご", "go"),
                KanjiEntry::new('六', "six", "ろく", "roku"),
                KanjiEntry::new('七', "seven", "なな", "nana"),
                KanjiEntry::new('八', "eight", "はち", "hachi")
                    .with_mnemonic("Two strokes spreading apart, like eight fanning out."),
                KanjiEntry::new('九', "nine", "きゅう", "kyuu"),
                KanjiEntry::new('十', "ten", "じゅう", "juu")
                    .with_mnemonic("A cross marks ten, like two hands of five crossing."),
            ],
        ),
        Lesson::new(
            2,
            "Days and Elements",
            vec![
                KanjiEntry::new('日', "sun", "にち", "nichi")
                    .with_mnemonic("A window with the sun shining through it."),
                KanjiEntry::new('月', "moon", "げつ", "getsu")
                    .with_mnemonic("A crescent moon with two clouds drifting across."),
                KanjiEntry::new('火', "fire", "ひ", "hi")
                    .with_mnemonic("A person waving their arms beside leaping sparks."),
                KanjiEntry::new('水', "water", "みず", "mizu"),
                KanjiEntry::new('木', "tree", "き", "ki")
                    .with_mnemonic("A trunk with branches up and roots spreading down."),
                KanjiEntry::new('金', "gold", "かね", "kane"),
                KanjiEntry::new('土', "earth", "つち", "tsuchi"),
                KanjiEntry::new('曜', "weekday", "よう", "you"),
            ],
        ),
        Lesson::new(
            3,
            "People and Nature",
            vec![
                KanjiEntry::new('人', "person", "ひと", "hito")
                    .with_mnemonic("Two legs striding forward: a person walking."),
                KanjiEntry::new('本', "book", "ほん", "hon")
                    .with_mnemonic("A tree with a line at its root: the origin, a book."),
                KanjiEntry::new('山', "mountain", "やま", "yama")
                    .with_mnemonic("Three peaks rising from the plain."),
                KanjiEntry::new('川', "river", "かわ", "kawa")
                    .with_mnemonic("Three streams of water flowing side by side."),
                KanjiEntry::new('田', "rice field", "た", "ta"),
                KanjiEntry::new('女', "woman", "おんな", "onna"),
                KanjiEntry::new('男', "man", "おとこ", "otoko")
                    .with_mnemonic("Strength in the rice field: the man at work."),
                KanjiEntry::new('子', "child", "こ", "ko"),
            ],
        ),
        Lesson::new(
            4,
            "Directions",
            vec![
                KanjiEntry::new('上', "above", "うえ", "ue"),
                KanjiEntry::new('下', "below", "した", "shita"),
                KanjiEntry::new('中', "middle", "なか", "naka")
                    .with_mnemonic("An arrow piercing the center of a box."),
                KanjiEntry::new('左', "left", "ひだり", "hidari"),
                KanjiEntry::new('右', "right", "みぎ", "migi"),
                KanjiEntry::new('東', "east", "ひがし", "higashi")
                    .with_mnemonic("The sun rising behind a tree: the east."),
                KanjiEntry::new('西', "west", "にし", "nishi"),
                KanjiEntry::new('南', "south", "みなみ", "minami"),
                KanjiEntry::new('北', "north", "きた", "kita"),
            ],
        ),
        Lesson::new(
            5,
            "Everyday Verbs",
            vec![
                KanjiEntry::new('見', "to see", "みる", "miru")
                    .with_mnemonic("An eye on legs, running around to see everything."),
                KanjiEntry::new('行', "to go", "いく", "iku"),
                KanjiEntry::new('食', "to eat", "たべる", "taberu")
                    .with_mnemonic("A roof over a pot of rice: gather under it to eat."),
                KanjiEntry::new('飲', "to drink", "のむ", "nomu"),
                KanjiEntry::new('言', "to say", "いう", "iu"),
                KanjiEntry::new('出', "to exit", "でる", "deru"),
                KanjiEntry::new('入', "to enter", "はいる", "hairu"),
                KanjiEntry::new('学', "to study", "がく", "gaku"),
            ],
        ),
    ]
}
