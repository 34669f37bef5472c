// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Typed CloudAPI operations.

use crate::types::*;
use crate::client::path;
use crate::{Client, Result};

/// Account and keys.
impl Client {
    /// `GetAccount`
    pub async fn get_account(&self) -> Result<Account> {
        self.get("").await
    }

    /// `UpdateAccount`, returns the updated account.
    pub async fn update_account(&self, update: &UpdateAccount) -> Result<Account> {
        self.post_form("", update).await
    }

    /// `ListKeys`
    pub async fn list_keys(&self) -> Result<Vec<Key>> {
        self.get("/keys").await
    }

    /// `GetKey`, by name or fingerprint.
    pub async fn get_key(&self, name: &str) -> Result<Key> {
        self.get(&path(&["keys", name])).await
    }
}

/// Users, roles and policies.
impl Client {
    /// `ListUsers`
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/users").await
    }

    /// `ListRoles`
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.get("/roles").await
    }

    /// `GetRole`
    pub async fn get_role(&self, role: &str) -> Result<Role> {
        self.get(&path(&["roles", role])).await
    }

    /// `ListPolicies`
    pub async fn list_policies(&self) -> Result<Vec<Policy>> {
        self.get("/policies").await
    }

    /// `GetPolicy`
    pub async fn get_policy(&self, policy: &str) -> Result<Policy> {
        self.get(&path(&["policies", policy])).await
    }
}

/// Machines.
impl Client {
    /// `ListMachines`
    pub async fn list_machines(&self) -> Result<Vec<Machine>> {
        self.get("/machines").await
    }

    /// `GetMachine`
    pub async fn get_machine(&self, id: &str) -> Result<Machine> {
        self.get(&path(&["machines", id])).await
    }

    /// `CreateMachine`
    ///
    /// CloudAPI may answer `201 Created`, which is reported as a
    /// [`Server`](crate::ErrorKind::Server) error with that status like any
    /// other status besides 200 and 204.
    pub async fn create_machine(&self, req: &CreateMachine) -> Result<Machine> {
        self.post_form("/machines", req).await
    }

    /// `StartMachine`
    ///
    /// CloudAPI may answer machine actions with `202 Accepted`, which is
    /// reported as a [`Server`](crate::ErrorKind::Server) error with that
    /// status. The same holds for [`Client::stop_machine`] and
    /// [`Client::reboot_machine`].
    pub async fn start_machine(&self, id: &str) -> Result<()> {
        self.machine_action(id, MachineAction::Start).await
    }

    /// `StopMachine`, see [`Client::start_machine`] about `202 Accepted`.
    pub async fn stop_machine(&self, id: &str) -> Result<()> {
        self.machine_action(id, MachineAction::Stop).await
    }

    /// `RebootMachine`, see [`Client::start_machine`] about `202 Accepted`.
    pub async fn reboot_machine(&self, id: &str) -> Result<()> {
        self.machine_action(id, MachineAction::Reboot).await
    }

    /// `DeleteMachine`
    pub async fn delete_machine(&self, id: &str) -> Result<()> {
        self.delete(&path(&["machines", id])).await
    }

    async fn machine_action(&self, id: &str, action: MachineAction) -> Result<()> {
        self.post_action(&path(&["machines", id]), action.as_str())
            .await
    }
}

/// Images and packages.
impl Client {
    /// `ListImages`
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        self.get("/images").await
    }

    /// `GetImage`
    pub async fn get_image(&self, id: &str) -> Result<Image> {
        self.get(&path(&["images", id])).await
    }

    /// `ListPackages`
    pub async fn list_packages(&self) -> Result<Vec<Package>> {
        self.get("/packages").await
    }
}

/// Networking and firewall.
impl Client {
    /// `ListNetworks`
    pub async fn list_networks(&self) -> Result<Vec<Network>> {
        self.get("/networks").await
    }

    /// `GetNetwork`
    pub async fn get_network(&self, id: &str) -> Result<Network> {
        self.get(&path(&["networks", id])).await
    }

    /// `ListFabricVLANs` on the default fabric.
    pub async fn list_fabric_vlans(&self) -> Result<Vec<Vlan>> {
        self.get("/fabrics/default/vlans").await
    }

    /// `ListFirewallRules`
    pub async fn list_firewall_rules(&self) -> Result<Vec<FirewallRule>> {
        self.get("/fwrules").await
    }

    /// `GetFirewallRule`
    pub async fn get_firewall_rule(&self, id: &str) -> Result<FirewallRule> {
        self.get(&path(&["fwrules", id])).await
    }
}

/// Volumes, migrations and datacenters.
impl Client {
    /// `ListVolumes`
    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.get("/volumes").await
    }

    /// `GetVolume`
    pub async fn get_volume(&self, id: &str) -> Result<Volume> {
        self.get(&path(&["volumes", id])).await
    }

    /// `ListMigrations`
    pub async fn list_migrations(&self) -> Result<Vec<Migration>> {
        self.get("/migrations").await
    }

    /// `GetMigration` for a machine.
    pub async fn get_migration(&self, machine: &str) -> Result<Migration> {
        self.get(&path(&["migrations", machine])).await
    }

    /// `ListDatacenters`
    pub async fn list_datacenters(&self) -> Result<Datacenters> {
        self.get("/datacenters").await
    }
}
