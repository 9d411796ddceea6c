/*
catalog.rs

Copyright 2025 Hervé Quatremain

This file is part of Kidcomputer.

Kidcomputer is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kidcomputer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kidcomputer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Computer parts and localized interface strings.
//!
//! The [`COMPUTER_PARTS`] table lists the hardware items that all the views and games use.
//! Each [`Entity`] carries its name, description, and facts in every supported [`Language`].
//!
//! To add a part, append an [`Entity`] to [`COMPUTER_PARTS`] and provide the matching audio
//! clips in [`crate::narration::AudioMap`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::Language;

/// A value that exists in every supported language.
#[derive(Debug, Clone, Copy)]
pub struct Localized<T: 'static> {
    pub fr: T,
    pub en: T,
    pub ar: T,
}

impl<T: Copy> Localized<T> {
    /// Return the value for the given language.
    pub fn get(&self, language: Language) -> T {
        match language {
            Language::Fr => self.fr,
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

/// Role of a part in the computer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Input,
    Output,
    Processing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Input => write!(f, "input"),
            Category::Output => write!(f, "output"),
            Category::Processing => write!(f, "processing"),
        }
    }
}

/// A hardware item.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    /// Stable identifier, also used as the key for the audio clips.
    pub id: &'static str,

    /// Display name.
    pub name: Localized<&'static str>,

    /// Shorter name for the word games, when the display name is too long for the grid.
    pub search: Option<Localized<&'static str>>,

    /// One-sentence description.
    pub description: Localized<&'static str>,

    /// Educational facts the learn mode rotates through.
    pub facts: Localized<&'static [&'static str]>,

    pub category: Category,
}

impl Entity {
    /// Return the display name.
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }

    /// Return the name to hide in the word games: the short form if any, else the display name.
    pub fn puzzle_name(&self, language: Language) -> &'static str {
        match &self.search {
            Some(s) => s.get(language),
            None => self.name.get(language),
        }
    }

    /// Return a fact, cycling through the list when the index is out of range.
    pub fn fact(&self, language: Language, index: usize) -> Option<&'static str> {
        let facts: &'static [&'static str] = self.facts.get(language);
        if facts.is_empty() {
            None
        } else {
            Some(facts[index % facts.len()])
        }
    }
}

/// Return the part with the given identifier.
pub fn find(id: &str) -> Option<&'static Entity> {
    COMPUTER_PARTS.iter().find(|e| e.id == id)
}

/// Return the parts of the given category.
pub fn by_category(category: Category) -> Vec<&'static Entity> {
    COMPUTER_PARTS
        .iter()
        .filter(|e| e.category == category)
        .collect()
}

pub static COMPUTER_PARTS: [Entity; 6] = [
    Entity {
        id: "monitor",
        name: Localized {
            fr: "Écran",
            en: "Screen",
            ar: "شاشة",
        },
        search: None,
        description: Localized {
            fr: "C'est comme une télé pour l'ordinateur.",
            en: "It's like a TV for the computer.",
            ar: "إنها مثل التلفاز للحاسوب.",
        },
        facts: Localized {
            fr: &[
                "Il te permet de voir tes dessins et tes photos.",
                "C'est grâce à lui que tu peux regarder des dessins animés.",
                "Il s'allume pour te montrer ce que fait l'ordinateur.",
                "Ne mets pas tes doigts dessus pour le garder propre !",
            ],
            en: &[
                "It lets you see your drawings and photos.",
                "You can watch cartoons on it.",
                "It lights up to show you what the computer is doing.",
            ],
            ar: &[
                "تسمح لك برؤية رسوماتك وصورك.",
                "بفضلها يمكنك مشاهدة الرسوم المتحركة.",
                "تضيء لتريك ما يفعله الحاسوب.",
            ],
        },
        category: Category::Output,
    },
    Entity {
        id: "keyboard",
        name: Localized {
            fr: "Clavier",
            en: "Keyboard",
            ar: "لوحة المفاتيح",
        },
        search: Some(Localized {
            fr: "Clavier",
            en: "Keyboard",
            ar: "مفاتيح",
        }),
        description: Localized {
            fr: "Il sert à écrire des lettres et des chiffres.",
            en: "Used to write letters and numbers.",
            ar: "تستخدم لكتابة الحروف والأرقام.",
        },
        facts: Localized {
            fr: &[
                "Tu peux l'utiliser pour écrire ton prénom.",
                "Il a toutes les lettres de l'alphabet, de A à Z.",
                "La plus grande touche s'appelle la barre d'espace.",
                "C'est comme le stylo de l'ordinateur.",
            ],
            en: &[
                "You can use it to write your name.",
                "It has all the letters from A to Z.",
                "The biggest button is the space bar.",
            ],
            ar: &[
                "يمكنك استخدامه لكتابة اسمك.",
                "يحتوي على جميع الحروف والأرقام.",
                "أكبر زر يسمى زر المسافة.",
            ],
        },
        category: Category::Input,
    },
    Entity {
        id: "mouse",
        name: Localized {
            fr: "Souris",
            en: "Mouse",
            ar: "فأرة",
        },
        search: None,
        description: Localized {
            fr: "Elle sert à cliquer sur les images.",
            en: "Used to click on pictures.",
            ar: "تستخدم للنقر على الصور.",
        },
        facts: Localized {
            fr: &[
                "Elle déplace la petite flèche sur l'écran.",
                "Quand tu bouges la souris avec ta main, la flèche bouge aussi.",
                "On clique sur ses boutons pour choisir des jeux.",
                "Elle a souvent une petite lumière rouge en dessous.",
            ],
            en: &[
                "It moves the little arrow on the screen.",
                "When you move your hand, the arrow moves too.",
                "You click its buttons to choose games.",
            ],
            ar: &[
                "تحرك السهم الصغير على الشاشة.",
                "عندما تحرك يدك، يتحرك السهم أيضاً.",
                "ننقر على أزرارها لاختيار الألعاب.",
            ],
        },
        category: Category::Input,
    },
    Entity {
        id: "tower",
        name: Localized {
            fr: "Unité Centrale",
            en: "Central Unit",
            ar: "الوحدة المركزية",
        },
        search: Some(Localized {
            fr: "Unité",
            en: "Tower",
            ar: "الوحدة",
        }),
        description: Localized {
            fr: "C'est le cerveau qui fait tout fonctionner.",
            en: "It's the brain that runs everything.",
            ar: "إنها العقل الذي يشغل كل شيء.",
        },
        facts: Localized {
            fr: &[
                "C'est le boîtier qui réfléchit pour faire marcher l'ordinateur.",
                "C'est le chef qui commande l'écran et le clavier.",
                "On appuie sur son bouton pour allumer l'ordinateur.",
                "C'est elle qui calcule tout ce qui se passe dans tes jeux.",
            ],
            en: &[
                "It is the brain of the computer.",
                "You plug the keyboard and mouse here.",
                "There is a button to turn on the computer.",
            ],
            ar: &[
                "إنها العقل المدبر للحاسوب.",
                "هنا نربط لوحة المفاتيح والفأرة.",
                "يوجد زر لتشغيل الحاسوب هنا.",
                "إنها تحسب كل ما يحدث في ألعابك.",
            ],
        },
        category: Category::Processing,
    },
    Entity {
        id: "speakers",
        name: Localized {
            fr: "Haut-parleurs",
            en: "Speakers",
            ar: "مكبرات الصوت",
        },
        search: Some(Localized {
            fr: "Enceintes",
            en: "Speakers",
            ar: "مكبرات",
        }),
        description: Localized {
            fr: "C'est par ici que sort le son.",
            en: "The sound comes from here.",
            ar: "منه يخرج الصوت والموسيقى.",
        },
        facts: Localized {
            fr: &[
                "Ils te permettent d'entendre la musique des jeux.",
                "Tu peux monter ou baisser le volume.",
                "C'est par ici que sort le son de l'ordinateur.",
                "Sans eux, tu n'entendrais rien du tout !",
            ],
            en: &[
                "They let you hear music from games.",
                "You can turn the volume up or down.",
                "The computer sound comes out of them.",
            ],
            ar: &[
                "يسمح لك بسماع الموسيقى من الألعاب.",
                "يمكنك رفع أو خفض الصوت.",
                "منه يخرج صوت الحاسوب.",
            ],
        },
        category: Category::Output,
    },
    Entity {
        id: "printer",
        name: Localized {
            fr: "Imprimante",
            en: "Printer",
            ar: "طابعة",
        },
        search: None,
        description: Localized {
            fr: "Elle sort tes dessins sur du papier.",
            en: "Prints your drawings on paper.",
            ar: "تطبع رسوماتك على الورق.",
        },
        facts: Localized {
            fr: &[
                "Elle met l'image de l'écran sur une feuille.",
                "Elle a besoin d'encre et de papier pour travailler.",
                "Attention, ça ne va pas aussi vite que l'écran !",
                "Tu peux imprimer tes coloriages avec elle.",
            ],
            en: &[
                "It puts the screen image on paper.",
                "It needs ink and paper to work.",
                "You can print your coloring pages with it.",
            ],
            ar: &[
                "تضع صورة الشاشة على الورق.",
                "تحتاج إلى حبر وورق لتعمل.",
                "يمكنك طباعة رسوماتك بها.",
            ],
        },
        category: Category::Output,
    },
];

/// Interface strings for one language.
///
/// The templates are rendered with [`formatx::formatx`], so translators can reorder the
/// placeholders.
#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub score: &'static str,
    pub bravo: &'static str,
    pub try_again: &'static str,
    pub congrats: &'static str,
    pub play_again: &'static str,
    pub words_to_find: &'static str,
    pub found_everything: &'static str,
    pub word_search_title: &'static str,
    pub memory_title: &'static str,
    pub robot_title: &'static str,
    pub robot_offline: &'static str,
    pub learn_title: &'static str,
    pub fun_fact: &'static str,
    pub find_title: &'static str,
    pub question: &'static str,
    pub sorter_title: &'static str,
    pub input_zone: &'static str,
    pub input_hint: &'static str,
    pub output_zone: &'static str,
    pub output_hint: &'static str,

    /// Template with the `{found}` and `{total}` placeholders.
    pub progress: &'static str,

    /// Template with the `{time}` placeholder.
    pub elapsed: &'static str,

    /// Template with the `{power}` placeholder.
    pub robot_power: &'static str,

    /// Template with the `{word}` placeholder.
    pub robot_lost: &'static str,
}

static UI_FR: UiText = UiText {
    title: "L'Ordi des Petits",
    score: "Score",
    bravo: "Bravo !",
    try_again: "Essaie encore !",
    congrats: "Gagné !",
    play_again: "Rejouer",
    words_to_find: "Mots à trouver",
    found_everything: "Tu as tout trouvé !",
    word_search_title: "Mots Cachés",
    memory_title: "Jeu de Mémoire",
    robot_title: "Sauve le Robot",
    robot_offline: "Robot éteint",
    learn_title: "Apprendre",
    fun_fact: "À quoi ça sert ?",
    find_title: "Cherche et Trouve",
    question: "Montre-moi :",
    sorter_title: "Le Trieur",
    input_zone: "ENTRÉE",
    input_hint: "Ça rentre dans l'ordi",
    output_zone: "SORTIE",
    output_hint: "Ça sort de l'ordi",
    progress: "{found}/{total}",
    elapsed: "Temps : {time}",
    robot_power: "Énergie : {power}%",
    robot_lost: "Le mot était {word}",
};

static UI_EN: UiText = UiText {
    title: "Little Computer",
    score: "Score",
    bravo: "Great job!",
    try_again: "Try again!",
    congrats: "You Won!",
    play_again: "Play Again",
    words_to_find: "Words to find",
    found_everything: "You found everything!",
    word_search_title: "Word Search",
    memory_title: "Memory Game",
    robot_title: "Save the Robot",
    robot_offline: "System Offline",
    learn_title: "Learn",
    fun_fact: "What is it for?",
    find_title: "Find It!",
    question: "Show me:",
    sorter_title: "The Sorter",
    input_zone: "INPUT",
    input_hint: "Goes into PC",
    output_zone: "OUTPUT",
    output_hint: "Comes out of PC",
    progress: "{found}/{total}",
    elapsed: "Time: {time}",
    robot_power: "{power}% Power",
    robot_lost: "The word was {word}",
};

static UI_AR: UiText = UiText {
    title: "حاسوب الصغار",
    score: "النقاط",
    bravo: "أحسنت !",
    try_again: "حاول مرة أخرى !",
    congrats: "فزت !",
    play_again: "العب مرة أخرى",
    words_to_find: "كلمات للبحث",
    found_everything: "لقد وجدت كل شيء!",
    word_search_title: "البحث عن الكلمات",
    memory_title: "لعبة الذاكرة",
    robot_title: "انقذ الروبوت",
    robot_offline: "الروبوت متوقف",
    learn_title: "تَعلَّم",
    fun_fact: "ما فائدته ؟",
    find_title: "ابحث وجد",
    question: "أرني :",
    sorter_title: "المصنف",
    input_zone: "إدخال",
    input_hint: "يدخل للحاسوب",
    output_zone: "إخراج",
    output_hint: "يخرج من الحاسوب",
    progress: "{total}/{found}",
    elapsed: "الوقت: {time}",
    robot_power: "الطاقة: {power}%",
    robot_lost: "الكلمة كانت {word}",
};

/// Return the interface strings for the given language.
pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Fr => &UI_FR,
        Language::En => &UI_EN,
        Language::Ar => &UI_AR,
    }
}
