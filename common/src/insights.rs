// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use rand::seq::SliceRandom;
use rand::{Rng, rng};

/// Internal investigator-specific operational guidance.
const INVESTIGATOR_TIPS: &[&str] = &[
    "A private target reveals the network's public IP, not the device's",
    "ARP entries only exist for hosts on your own subnet",
    "NetBIOS status queries need a Windows host to run",
    "WHOIS output is raw registry text, pipe it through less",
    "No ping reply doesn't mean offline, firewalls drop ICMP too",
    "The '--redact' flag is your friend for output sharing",
];

/// Technical facts and networking trivia.
const TECH_TRIVIA: &[&str] = &[
    "WHOIS dates back to 1982 and predates DNS itself",
    "1.1.1.1 is actually owned by APNIC, not Cloudflare",
    "Ping is named after the sound of a submarine's sonar",
    "127.0.0.0/8 reserves sixteen million addresses for loopback",
    "PTR records live under the in-addr.arpa zone, spelled backwards",
];

/// Industry jokes and developer humor.
const DEV_HUMOR: &[&str] = &[
    "It's not DNS. There's no way it's DNS. It was DNS",
    "NAT is just a network wearing a trench coat",
    "Geo-location says my server lives in a corn field",
    "The 'S' in IoT stands for Security",
    "Hardware is the part you kick when the software fails",
];

/// Generates a randomized list of UI messages.
///
/// Every slot in the resulting list has a 50% probability of being an
/// operational tip and a 50% probability of being flavor text (trivia/humor),
/// provided both pools still have remaining items.
pub fn get_shuffled_insights() -> Vec<&'static str> {
    let mut rng = rng();

    let mut tips = INVESTIGATOR_TIPS.to_vec();
    tips.shuffle(&mut rng);

    let mut flavor: Vec<&str> = TECH_TRIVIA
        .iter()
        .chain(DEV_HUMOR.iter())
        .copied()
        .collect();
    flavor.shuffle(&mut rng);

    let total_len = tips.len() + flavor.len();
    let mut output = Vec::with_capacity(total_len);

    while !tips.is_empty() && !flavor.is_empty() {
        let pick_tip = rng.random_bool(0.5);
        if pick_tip {
            output.push(tips.remove(0));
        } else {
            output.push(flavor.remove(0));
        }
    }

    output.extend(tips);
    output.extend(flavor);
    output
}
